//! Subsystem names and artifact metadata for WASM functions.

/// Name of the WASM builder subsystem.
pub const BUILDER: &str = "wasm";

/// Name of the WASM deployer subsystem.
pub const DEPLOYER: &str = "wasm";

/// OCI media type of a WASM module artifact.
///
/// Registries and clients match on this exact string.
pub const MEDIA_TYPE: &str = "application/vnd.wasm.module.v1+wasm";
