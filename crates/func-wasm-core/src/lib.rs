//! WASI runtime identification for function build and deploy pipelines.
//!
//! This crate provides:
//! - [`WasiRuntime`]: The closed catalog of supported language/WASI pairings
//! - [`is_wasi_runtime`] and [`all_wasi_runtimes`]: Queries over that catalog
//! - [`network`]: WASI network permission types of the `WasmModule` resource
//! - [`BuildTarget`]: A function's WASM build target as read from config
//!
//! # Example
//!
//! ```
//! use func_wasm_core::{WasiRuntime, all_wasi_runtimes, is_wasi_runtime};
//!
//! assert!(is_wasi_runtime("rust-wasi"));
//! assert!(!is_wasi_runtime("unknown-wasi"));
//! assert_eq!(all_wasi_runtimes()[0], "rust-wasi");
//!
//! let runtime: WasiRuntime = "go-wasi".parse().unwrap();
//! assert_eq!(runtime.language(), "go");
//! ```

pub mod constants;
pub mod network;
pub mod runtime;
pub mod target;

pub use constants::{BUILDER, DEPLOYER, MEDIA_TYPE};
pub use network::{WasiNetworkConfig, WasiTcpConfig, WasiUdpConfig};
pub use runtime::{WasiRuntime, all_wasi_runtimes, is_wasi_runtime};
pub use target::BuildTarget;
