//! WASI runtime registry.
//!
//! This module defines the fixed catalog of WASI runtimes a function can be
//! built for. Identifiers follow the `<language>-wasi` naming convention,
//! but classification is by exact match against the catalog only: a string
//! that merely ends in `-wasi` is not a WASI runtime.
//!
//! Identifier strings are persisted in build metadata and passed on the
//! command line. The catalog is append-only; new runtimes go at the end of
//! [`WasiRuntime::ALL`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use func_wasm_common::RegistryError;

/// Runtime identifier for Rust compiled to WASI.
pub const RUNTIME_RUST_WASI: &str = "rust-wasi";
/// Runtime identifier for Go compiled to WASI.
pub const RUNTIME_GO_WASI: &str = "go-wasi";
/// Runtime identifier for Python on WASI.
pub const RUNTIME_PYTHON_WASI: &str = "python-wasi";
/// Runtime identifier for JavaScript on WASI.
pub const RUNTIME_JS_WASI: &str = "js-wasi";
/// Runtime identifier for C compiled to WASI.
pub const RUNTIME_C_WASI: &str = "c-wasi";
/// Runtime identifier for C++ compiled to WASI.
pub const RUNTIME_CPP_WASI: &str = "cpp-wasi";
/// Runtime identifier for .NET on WASI.
pub const RUNTIME_DOTNET_WASI: &str = "dotnet-wasi";
/// Runtime identifier for Swift compiled to WASI.
pub const RUNTIME_SWIFT_WASI: &str = "swift-wasi";

/// A supported WASI runtime.
///
/// Each variant corresponds to exactly one identifier string. The string
/// form is used for display, parsing, and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasiRuntime {
    Rust,
    Go,
    Python,
    Js,
    C,
    Cpp,
    Dotnet,
    Swift,
}

impl WasiRuntime {
    /// Every supported runtime, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Rust,
        Self::Go,
        Self::Python,
        Self::Js,
        Self::C,
        Self::Cpp,
        Self::Dotnet,
        Self::Swift,
    ];

    /// The identifier string of this runtime, e.g. `"rust-wasi"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => RUNTIME_RUST_WASI,
            Self::Go => RUNTIME_GO_WASI,
            Self::Python => RUNTIME_PYTHON_WASI,
            Self::Js => RUNTIME_JS_WASI,
            Self::C => RUNTIME_C_WASI,
            Self::Cpp => RUNTIME_CPP_WASI,
            Self::Dotnet => RUNTIME_DOTNET_WASI,
            Self::Swift => RUNTIME_SWIFT_WASI,
        }
    }

    /// The source language of this runtime, e.g. `"rust"`.
    pub const fn language(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::Js => "js",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Dotnet => "dotnet",
            Self::Swift => "swift",
        }
    }

    /// Look up a runtime by its exact identifier string.
    ///
    /// Returns `None` for anything not in the catalog, including the empty
    /// string and unregistered names with a `-wasi` suffix.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::iter().find(|runtime| runtime.as_str() == identifier)
    }

    /// Iterate over every supported runtime in catalog order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

/// Returns `true` if `runtime` is the identifier of a supported WASI runtime.
pub fn is_wasi_runtime(runtime: &str) -> bool {
    WasiRuntime::from_identifier(runtime).is_some()
}

/// Returns the identifiers of all supported WASI runtimes, in catalog order.
///
/// Each call returns a newly allocated list.
pub fn all_wasi_runtimes() -> Vec<&'static str> {
    WasiRuntime::iter().map(WasiRuntime::as_str).collect()
}

impl fmt::Display for WasiRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for WasiRuntime {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<WasiRuntime> for &'static str {
    fn from(runtime: WasiRuntime) -> Self {
        runtime.as_str()
    }
}

impl FromStr for WasiRuntime {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| {
            debug!(runtime = s, "Not a registered WASI runtime");
            RegistryError::unsupported_runtime(s)
        })
    }
}

impl Serialize for WasiRuntime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WasiRuntime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        identifier.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_is_wasi_runtime() {
        let cases = [
            ("rust-wasi", RUNTIME_RUST_WASI, true),
            ("go-wasi", RUNTIME_GO_WASI, true),
            ("python-wasi", RUNTIME_PYTHON_WASI, true),
            ("js-wasi", RUNTIME_JS_WASI, true),
            ("c-wasi", RUNTIME_C_WASI, true),
            ("cpp-wasi", RUNTIME_CPP_WASI, true),
            ("dotnet-wasi", RUNTIME_DOTNET_WASI, true),
            ("swift-wasi", RUNTIME_SWIFT_WASI, true),
            ("node (not wasi)", "node", false),
            ("python (not wasi)", "python", false),
            ("go (not wasi)", "go", false),
            ("rust (not wasi)", "rust", false),
            ("empty string", "", false),
            ("unknown runtime", "unknown-wasi", false),
        ];

        for (name, runtime, expected) in cases {
            assert_eq!(
                is_wasi_runtime(runtime),
                expected,
                "{name}: is_wasi_runtime({runtime:?})"
            );
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_wasi_runtime("Rust-Wasi"));
        assert!(!is_wasi_runtime(" rust-wasi"));
        assert!(!is_wasi_runtime("rust-wasi "));
        assert!(!is_wasi_runtime("-wasi"));
        assert!(!is_wasi_runtime("rust-wasi-wasi"));
        assert!(!is_wasi_runtime("rust-wasip2"));
    }

    #[test]
    fn test_all_wasi_runtimes_order() {
        assert_eq!(
            all_wasi_runtimes(),
            vec![
                "rust-wasi",
                "go-wasi",
                "python-wasi",
                "js-wasi",
                "c-wasi",
                "cpp-wasi",
                "dotnet-wasi",
                "swift-wasi",
            ]
        );
    }

    #[test]
    fn test_all_wasi_runtimes_distinct_and_recognized() {
        let runtimes = all_wasi_runtimes();
        let unique: HashSet<_> = runtimes.iter().collect();

        assert_eq!(runtimes.len(), 8);
        assert_eq!(unique.len(), 8);
        assert!(runtimes.iter().all(|r| is_wasi_runtime(r)));
        assert!(runtimes.iter().all(|r| r.ends_with("-wasi")));
    }

    #[test]
    fn test_all_wasi_runtimes_returns_independent_copies() {
        let mut first = all_wasi_runtimes();
        first.clear();
        first.push("node");

        let second = all_wasi_runtimes();
        assert_eq!(second.len(), 8);
        assert_eq!(second[0], RUNTIME_RUST_WASI);
        assert_eq!(all_wasi_runtimes(), all_wasi_runtimes());
    }

    #[test]
    fn test_as_str_and_language() {
        for runtime in WasiRuntime::iter() {
            assert_eq!(
                runtime.as_str(),
                format!("{}-wasi", runtime.language()),
                "{runtime:?}"
            );
        }
        assert_eq!(WasiRuntime::Dotnet.language(), "dotnet");
        assert_eq!(WasiRuntime::Cpp.as_str(), "cpp-wasi");
    }

    #[test]
    fn test_from_identifier() {
        assert_eq!(
            WasiRuntime::from_identifier("swift-wasi"),
            Some(WasiRuntime::Swift)
        );
        assert_eq!(WasiRuntime::from_identifier("swift"), None);
        assert_eq!(WasiRuntime::from_identifier(""), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("js-wasi".parse::<WasiRuntime>(), Ok(WasiRuntime::Js));

        let err = "unknown-wasi".parse::<WasiRuntime>().unwrap_err();
        assert_eq!(err, RegistryError::unsupported_runtime("unknown-wasi"));
    }

    #[test]
    fn test_display() {
        assert_eq!(WasiRuntime::Go.to_string(), "go-wasi");
        assert_eq!(format!("{}", WasiRuntime::C), "c-wasi");
    }

    #[test]
    fn test_serialize_as_identifier() {
        let json = serde_json::to_string(&WasiRuntime::Python).unwrap();
        assert_eq!(json, r#""python-wasi""#);

        let runtimes: Vec<WasiRuntime> =
            serde_json::from_str(r#"["dotnet-wasi", "rust-wasi"]"#).unwrap();
        assert_eq!(runtimes, vec![WasiRuntime::Dotnet, WasiRuntime::Rust]);
    }

    #[test]
    fn test_deserialize_rejects_unregistered() {
        let result = serde_json::from_str::<WasiRuntime>(r#""node""#);
        let err = result.unwrap_err();

        assert!(err.to_string().contains("Unsupported WASI runtime: 'node'"));
    }
}
