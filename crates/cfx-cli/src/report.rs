//! # Report Aggregator
//!
//! Orchestrates one full pass over the fixture corpus: resolve each
//! fixture's suite through the registry, fetch the (cached) compiled
//! schema from the store, collect sorted violations from the engine, and
//! accumulate every failure into a single [`RunReport`].
//!
//! Per fixture the pipeline is `Loaded → SuiteResolved → SchemaResolved
//! → Validated → {Pass | Fail}`; any stage failure records report lines
//! and moves on to the next fixture. Only a [`SchemaStoreError`] aborts
//! the run — a broken schema would silently invalidate every fixture in
//! its suite, so it is reported once, loudly, instead.

use std::path::Path;

use serde_json::Value;

use cfx_core::{FixtureFailure, RunReport, SuiteRegistry};
use cfx_schema::{engine, SchemaStore, SchemaStoreError};

use crate::fixtures;
use crate::FIXTURES_SUBDIR;

/// Validate every fixture under `<repo_root>/contracts/fixtures` against
/// the registry.
///
/// The registry and store are injected so tests can substitute reduced
/// registries and scratch schema directories.
///
/// # Errors
///
/// Returns a [`SchemaStoreError`] when a referenced schema cannot be
/// loaded or compiled; per-fixture problems are collected in the report
/// instead.
pub fn run(
    registry: &SuiteRegistry,
    store: &SchemaStore,
    repo_root: &Path,
) -> Result<RunReport, SchemaStoreError> {
    let fixtures_root = repo_root.join(FIXTURES_SUBDIR);
    let fixture_paths = fixtures::discover(&fixtures_root);

    tracing::debug!(
        fixtures = fixture_paths.len(),
        suites = registry.len(),
        root = %repo_root.display(),
        "starting contract validation pass"
    );

    let mut report = RunReport {
        discovered: fixture_paths.len(),
        failures: Vec::new(),
    };

    for path in &fixture_paths {
        let shown = fixtures::display_path(path, repo_root);

        let fixture = match fixtures::parse(path, &shown) {
            Ok(fixture) => fixture,
            Err(failure) => {
                report.record(failure);
                continue;
            }
        };

        let suite = declared_suite(&fixture);
        let Some(schema_name) = registry.resolve(&suite) else {
            report.record(FixtureFailure::UnknownSuite { path: shown, suite });
            continue;
        };

        let schema = store.load(schema_name)?;
        for violation in engine::check(&schema, &fixture) {
            report.record(FixtureFailure::Violation {
                path: shown.clone(),
                location: violation.location,
                message: violation.message,
            });
        }
    }

    tracing::debug!(
        discovered = report.discovered,
        failures = report.failures.len(),
        schema_loads = store.load_count(),
        "contract validation pass finished"
    );

    Ok(report)
}

/// The fixture's declared suite, as the literal value to look up and
/// report. A missing or non-string `suite` field renders as its compact
/// JSON (`null`, `123`, ...), which can never match a registry key.
fn declared_suite(fixture: &Value) -> String {
    match fixture.get("suite") {
        Some(Value::String(suite)) => suite.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}
