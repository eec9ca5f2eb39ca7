//! WASM build targets.
//!
//! A build target names the WASI runtime a function is built for and the
//! network permissions its module is deployed with.
//!
//! # Example
//!
//! ```toml
//! runtime = "rust-wasi"
//!
//! [network]
//! allowIpNameLookup = true
//!
//! [network.tcp]
//! connect = ["api.example.com:443"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use func_wasm_common::{TargetError, load_toml_file, parse_toml};

use crate::network::WasiNetworkConfig;
use crate::runtime::WasiRuntime;

/// A function's WASM build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    /// The WASI runtime the function is built for.
    pub runtime: WasiRuntime,

    /// Network permissions for the deployed module.
    ///
    /// `None` leaves the resource default in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<WasiNetworkConfig>,
}

/// On-disk shape of a build target.
///
/// `runtime` is read as a plain string so an unsupported runtime is reported
/// as such instead of as a TOML error.
#[derive(Debug, Deserialize)]
struct BuildTargetFile {
    runtime: String,
    #[serde(default)]
    network: Option<WasiNetworkConfig>,
}

impl BuildTarget {
    /// Create a target for `runtime` with no network configuration.
    pub fn new(runtime: WasiRuntime) -> Self {
        Self {
            runtime,
            network: None,
        }
    }

    /// Set the network permissions.
    #[must_use]
    pub fn with_network(mut self, network: WasiNetworkConfig) -> Self {
        self.network = Some(network);
        self
    }

    /// Load a build target from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// runtime is not a supported WASI runtime.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TargetError> {
        let file: BuildTargetFile = load_toml_file(path.as_ref())?;
        let target = Self::from_target_file(file)?;

        info!(
            path = %path.as_ref().display(),
            runtime = %target.runtime,
            "Loaded build target"
        );

        Ok(target)
    }

    /// Parse a build target from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed, or if its runtime is
    /// not a supported WASI runtime.
    pub fn from_toml(content: &str) -> Result<Self, TargetError> {
        let file: BuildTargetFile = parse_toml(content)?;
        Self::from_target_file(file)
    }

    /// Network permissions, or the deny-all default when none are set.
    pub fn network_or_default(&self) -> WasiNetworkConfig {
        self.network.clone().unwrap_or_default()
    }

    fn from_target_file(file: BuildTargetFile) -> Result<Self, TargetError> {
        let runtime = file.runtime.parse::<WasiRuntime>().inspect_err(|_| {
            warn!(runtime = %file.runtime, "Build target runtime is not a WASI runtime");
        })?;

        Ok(Self {
            runtime,
            network: file.network,
        })
    }
}
