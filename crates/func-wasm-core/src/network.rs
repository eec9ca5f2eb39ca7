//! WASI network configuration.
//!
//! These are the `spec.network` types of the `WasmModule` resource, exposed
//! here so build and deploy code does not name the CRD crate directly. They
//! are aliases, not copies: layout, serialization and validation belong to
//! the resource schema.

use serving_wasm_api::v1alpha1;

/// WASI network permissions for a WASM module.
pub type WasiNetworkConfig = v1alpha1::NetworkSpec;

/// TCP socket permissions for WASI.
pub type WasiTcpConfig = v1alpha1::TcpSpec;

/// UDP socket permissions for WASI.
pub type WasiUdpConfig = v1alpha1::UdpSpec;
