//! # cfx-cli — Contract Fixture Harness CLI
//!
//! Provides the `cfx` command, replacing the Python
//! `scripts/validate_contracts.py` with a structured Rust implementation.
//!
//! One invocation validates the entire fixture tree against the entire
//! suite registry:
//!
//! ```bash
//! cfx            # resolve the repository root from the current directory
//! cfx path/to/repo
//! ```
//!
//! Exit code `0` when every fixture conforms, `1` otherwise. All
//! diagnostics go to standard output; logs go to standard error under
//! `RUST_LOG` control.

pub mod fixtures;
pub mod report;

use std::path::{Path, PathBuf};

/// Schemas directory, relative to the repository root.
pub const SCHEMAS_SUBDIR: &str = "contracts/schemas";

/// Fixtures directory, relative to the repository root.
pub const FIXTURES_SUBDIR: &str = "contracts/fixtures";

/// Walk up from `start` to find the repository root.
///
/// The root is the first ancestor containing both `contracts/schemas`
/// and `contracts/fixtures`.
pub fn resolve_repo_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(SCHEMAS_SUBDIR).is_dir() && dir.join(FIXTURES_SUBDIR).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
