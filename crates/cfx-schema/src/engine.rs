//! # Validation Engine Boundary
//!
//! The harness delegates all schema interpretation (types, formats,
//! enums, patterns, `$ref` resolution, draft keywords) to the
//! `jsonschema` crate. This module is the only place that crate's API is
//! touched: it compiles schema documents and converts the engine's error
//! stream into [`Violation`]s.
//!
//! The engine's error collection has no guaranteed order, so violations
//! are always sorted by structural path before they leave this module.
//! The governed schemas are self-contained (internal `$ref`s only), so
//! no custom retriever is installed.

use jsonschema::Validator;
use serde_json::Value;

use cfx_core::StructuralPath;

/// One schema violation inside a fixture document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where in the document the violation occurred; root when empty.
    pub location: StructuralPath,
    /// Engine-provided, human-readable description.
    pub message: String,
}

/// Compile a parsed schema document under Draft 2020-12 semantics.
///
/// # Errors
///
/// Returns the engine's compile error rendered as a string; the store
/// wraps it with the schema name.
pub fn compile(schema: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(schema)
        .map_err(|e| e.to_string())
}

/// Validate an instance and collect every violation, sorted by
/// structural path.
///
/// An empty result means the instance conforms. Violations at the same
/// location keep the engine's relative order.
pub fn check(schema: &Validator, instance: &Value) -> Vec<Violation> {
    let mut violations: Vec<Violation> = schema
        .iter_errors(instance)
        .map(|error| Violation {
            location: StructuralPath::from_json_pointer(&error.instance_path.to_string()),
            message: error.to_string(),
        })
        .collect();
    violations.sort_by(|a, b| a.location.cmp(&b.location));
    violations
}
