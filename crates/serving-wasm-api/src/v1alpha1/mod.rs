//! `wasm.serving.knative.dev/v1alpha1` schema.

mod network;

pub use network::{NetworkSpec, TcpSpec, UdpSpec};

/// API version of this schema, as written in `apiVersion`.
pub const API_VERSION: &str = "wasm.serving.knative.dev/v1alpha1";

/// Kind of the custom resource.
pub const KIND: &str = "WasmModule";
