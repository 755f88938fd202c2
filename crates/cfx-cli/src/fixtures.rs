//! # Fixture Loader
//!
//! Discovers fixture documents under the fixtures root and parses each
//! one. Discovery is recursive and sorted lexicographically by path, so
//! repeated runs produce identical report ordering.
//!
//! A fixture that cannot be read or parsed becomes a fixture-level
//! failure; it never aborts the run. Unreadable directories are logged
//! and skipped, and a missing fixtures root yields an empty corpus.

use std::path::{Path, PathBuf};

use serde_json::Value;

use cfx_core::FixtureFailure;

/// Recursively collect every `*.json` document under `fixtures_root`,
/// sorted lexicographically by path.
pub fn discover(fixtures_root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    walk(fixtures_root, &mut found);
    found.sort();
    found
}

fn walk(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk(&path, acc);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            acc.push(path);
        }
    }
}

/// Parse one fixture document.
///
/// `display_path` is the root-relative path used in report lines.
///
/// # Errors
///
/// Returns the fixture-level failure to record: `Unreadable` when the
/// file cannot be read, `InvalidJson` (with the parser's line/column
/// detail) when it is not valid JSON.
pub fn parse(path: &Path, display_path: &str) -> Result<Value, FixtureFailure> {
    let content = std::fs::read_to_string(path).map_err(|e| FixtureFailure::Unreadable {
        path: display_path.to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| FixtureFailure::InvalidJson {
        path: display_path.to_string(),
        detail: e.to_string(),
    })
}

/// Render a fixture path relative to the repository root for reporting.
///
/// Falls back to the full path when the fixture is outside the root.
pub fn display_path(path: &Path, repo_root: &Path) -> String {
    path.strip_prefix(repo_root)
        .unwrap_or(path)
        .display()
        .to_string()
}
