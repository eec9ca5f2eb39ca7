//! WASI network permissions of a `WasmModule`.
//!
//! These map to the `spec.network` field. Address lists are passed to the
//! WASI host as written; the controller interprets them.

use serde::{Deserialize, Serialize};

/// Network permissions granted to a WASM module.
///
/// Everything is denied unless granted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Inherit the host's full network access.
    #[serde(default, skip_serializing_if = "is_false")]
    pub inherit: bool,

    /// Allow the module to resolve host names.
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_ip_name_lookup: bool,

    /// TCP socket permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpSpec>,

    /// UDP socket permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp: Option<UdpSpec>,
}

/// TCP socket permissions.
///
/// Entries are `host:port` patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpSpec {
    /// Addresses the module may bind and listen on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind: Vec<String>,

    /// Addresses the module may connect to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connect: Vec<String>,
}

/// UDP socket permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdpSpec {
    /// Addresses the module may bind to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind: Vec<String>,

    /// Addresses the module may connect to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connect: Vec<String>,

    /// Addresses the module may send datagrams to without connecting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outgoing: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
