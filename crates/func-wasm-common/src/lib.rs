//! Common types, errors, and utilities for func-wasm.
//!
//! This crate provides shared functionality used across the func-wasm workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - TOML configuration loading shared by build target files

pub mod config;
pub mod error;

pub use config::{ConfigFileError, load_toml_file, parse_toml};
pub use error::{RegistryError, TargetError};
