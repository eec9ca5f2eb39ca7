//! Schema types of the `WasmModule` custom resource.
//!
//! The types mirror the CRD's `spec` as served by the cluster API and are
//! versioned by API group version. Consumers should depend on the versioned
//! module they target:
//!
//! - [`v1alpha1`]: Network permission schema (`spec.network`)

pub mod v1alpha1;

/// API group of the `WasmModule` resource.
pub const GROUP: &str = "wasm.serving.knative.dev";
