//! func-wasm CLI entry point.
//!
//! Lists the supported WASI runtimes, checks runtime identifiers, and
//! inspects WASM build target files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use func_wasm_core::{
    BUILDER, BuildTarget, DEPLOYER, MEDIA_TYPE, WasiNetworkConfig, WasiRuntime, all_wasi_runtimes,
    is_wasi_runtime,
};

#[derive(Debug, Parser)]
#[command(name = "func-wasm", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all supported WASI runtimes
    Runtimes {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check whether a runtime identifier names a WASI runtime
    Check {
        /// Runtime identifier, e.g. `rust-wasi`
        runtime: String,
    },

    /// Show the resolved WASM build target of a config file
    Inspect {
        /// Path to the build target TOML file
        #[arg(env = "FUNC_WASM_TARGET", default_value = "func.toml")]
        config: PathBuf,
    },
}

/// Resolved view of a build target, as printed by `inspect`.
#[derive(Debug, Serialize)]
struct TargetReport {
    runtime: WasiRuntime,
    language: &'static str,
    builder: &'static str,
    deployer: &'static str,
    media_type: &'static str,
    network: WasiNetworkConfig,
}

impl From<&BuildTarget> for TargetReport {
    fn from(target: &BuildTarget) -> Self {
        Self {
            runtime: target.runtime,
            language: target.runtime.language(),
            builder: BUILDER,
            deployer: DEPLOYER,
            media_type: MEDIA_TYPE,
            network: target.network_or_default(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so command output stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,func_wasm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    match cli.command {
        Command::Runtimes { json } => {
            let runtimes = all_wasi_runtimes();
            if json {
                println!("{}", serde_json::to_string(&runtimes)?);
            } else {
                for runtime in runtimes {
                    println!("{runtime}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { runtime } => {
            if is_wasi_runtime(&runtime) {
                println!("{runtime}: WASI runtime");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{runtime}: not a WASI runtime");
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Inspect { config } => {
            let target = BuildTarget::from_file(&config)
                .with_context(|| format!("Failed to load build target '{}'", config.display()))?;

            let report = TargetReport::from(&target);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
