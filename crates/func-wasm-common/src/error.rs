//! Error types for func-wasm.
//!
//! Runtime classification itself never fails; these errors exist for callers
//! that turn an unrecognized runtime into a hard failure:
//! - [`RegistryError`]: Parsing a runtime identifier into a typed value
//! - [`TargetError`]: Loading a build target configuration

use thiserror::Error;

use crate::config::ConfigFileError;

/// Errors from typed runtime identifier parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The string is not one of the registered WASI runtime identifiers.
    #[error("Unsupported WASI runtime: '{runtime}'")]
    UnsupportedRuntime {
        /// The rejected identifier, verbatim.
        runtime: String,
    },
}

/// Errors from loading a build target.
#[derive(Error, Debug)]
pub enum TargetError {
    /// The configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigFileError),

    /// The build target names a runtime that is not a WASI runtime.
    #[error("Build target runtime '{runtime}' is not a supported WASI runtime")]
    UnsupportedRuntime {
        /// The rejected identifier, verbatim.
        runtime: String,
    },
}

impl RegistryError {
    /// Create a new `UnsupportedRuntime` error.
    pub fn unsupported_runtime(runtime: impl Into<String>) -> Self {
        Self::UnsupportedRuntime {
            runtime: runtime.into(),
        }
    }

    /// The identifier that caused this error.
    pub fn runtime(&self) -> &str {
        match self {
            Self::UnsupportedRuntime { runtime } => runtime,
        }
    }
}

impl TargetError {
    /// Create a new `UnsupportedRuntime` error.
    pub fn unsupported_runtime(runtime: impl Into<String>) -> Self {
        Self::UnsupportedRuntime {
            runtime: runtime.into(),
        }
    }

    /// Returns `true` if the target was rejected because of its runtime.
    pub fn is_unsupported_runtime(&self) -> bool {
        matches!(self, Self::UnsupportedRuntime { .. })
    }
}

impl From<RegistryError> for TargetError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnsupportedRuntime { runtime } => Self::UnsupportedRuntime { runtime },
        }
    }
}
