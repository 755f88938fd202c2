//! # cfx entry point
//!
//! Parses arguments, resolves the repository root, and runs one full
//! contract-validation pass. The report goes to stdout; logs go to
//! stderr under `RUST_LOG` control.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfx_cli::{report, resolve_repo_root, SCHEMAS_SUBDIR};
use cfx_core::SuiteRegistry;
use cfx_schema::SchemaStore;

/// Contract fixture harness.
///
/// Validates every fixture under `contracts/fixtures/` against the JSON
/// Schema governing its declared suite. Exits 0 when every fixture
/// conforms, 1 if any failure was recorded.
#[derive(Parser, Debug)]
#[command(name = "cfx", version, about, long_about = None)]
struct Cli {
    /// Repository root containing contracts/schemas and
    /// contracts/fixtures. Resolved by walking up from the current
    /// directory when omitted.
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let repo_root = match cli.root {
        Some(root) => root,
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            resolve_repo_root(&cwd).with_context(|| {
                format!(
                    "could not locate a repository root (a directory containing \
                     contracts/schemas and contracts/fixtures) above {}",
                    cwd.display()
                )
            })?
        }
    };

    tracing::debug!(root = %repo_root.display(), "resolved repository root");

    let registry = SuiteRegistry::builtin();
    let store = SchemaStore::new(repo_root.join(SCHEMAS_SUBDIR));

    let run_report = report::run(&registry, &store, &repo_root)
        .context("contract schema configuration is broken")?;

    println!("{}", run_report.render());
    Ok(run_report.exit_code())
}
