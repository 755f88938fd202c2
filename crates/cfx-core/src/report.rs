//! # Fixture Failures and the Run Report
//!
//! Everything that can go wrong with a single fixture is a
//! [`FixtureFailure`]: collected, never thrown, rendered as exactly one
//! report line. The [`RunReport`] accumulates failures across the run and
//! renders the final pass/fail output once.
//!
//! Only schema-store errors abort a run; they live in `cfx-schema`, not
//! here, because a broken schema is a configuration defect rather than a
//! property of any one fixture.

use thiserror::Error;

use crate::path::StructuralPath;

/// A recoverable, per-fixture failure.
///
/// The `#[error]` strings are the exact report-line formats; fixture
/// paths are rendered relative to the repository root by the loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureFailure {
    /// The fixture file could not be read at all.
    #[error("{path}: unreadable fixture ({reason})")]
    Unreadable {
        /// Fixture path relative to the repository root.
        path: String,
        /// Operating-system error description.
        reason: String,
    },

    /// The fixture file is not syntactically valid JSON.
    ///
    /// `detail` is the parser's message and includes the line/column
    /// position of the first syntax error.
    #[error("{path}: invalid JSON ({detail})")]
    InvalidJson {
        /// Fixture path relative to the repository root.
        path: String,
        /// Parser message, e.g. `expected value at line 3 column 5`.
        detail: String,
    },

    /// The fixture declares a suite the registry does not know.
    ///
    /// A missing or non-string `suite` field renders as its compact JSON
    /// (`null`, `123`, ...), so the report still shows the literal value
    /// the fixture carried.
    #[error("{path}: unknown suite '{suite}'")]
    UnknownSuite {
        /// Fixture path relative to the repository root.
        path: String,
        /// The declared suite value.
        suite: String,
    },

    /// The fixture parsed but violates its governing schema.
    #[error("{path} [{location}]: {message}")]
    Violation {
        /// Fixture path relative to the repository root.
        path: String,
        /// Where in the document the violation occurred.
        location: StructuralPath,
        /// Engine-provided description of the violation.
        message: String,
    },
}

impl FixtureFailure {
    /// The fixture path this failure belongs to.
    pub fn path(&self) -> &str {
        match self {
            Self::Unreadable { path, .. }
            | Self::InvalidJson { path, .. }
            | Self::UnknownSuite { path, .. }
            | Self::Violation { path, .. } => path,
        }
    }
}

/// Outcome of one full pass over the fixture corpus.
///
/// Built incrementally by the aggregator, finalized once, rendered to the
/// user-facing output exactly once per run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Number of fixture documents discovered under the fixtures root.
    ///
    /// This is the success-count denominator. It counts discovered
    /// documents, not successfully validated ones; the two agree exactly
    /// when there are zero failures.
    pub discovered: usize,
    /// Every failure found during the run, in report order.
    pub failures: Vec<FixtureFailure>,
}

impl RunReport {
    /// True when no failure of any kind was recorded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit code: `0` on success, `1` if any failure was recorded.
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.is_success())
    }

    /// Record one failure.
    pub fn record(&mut self, failure: FixtureFailure) {
        self.failures.push(failure);
    }

    /// Render the complete user-facing report.
    ///
    /// Success: a single count line. Failure: a header, a blank line, and
    /// one bulleted line per failure so all contract drift is visible in
    /// a single execution.
    pub fn render(&self) -> String {
        if self.is_success() {
            return format!(
                "Validated {} contract fixture(s) successfully.",
                self.discovered
            );
        }
        let mut out = String::from("Contract validation failed:\n");
        for failure in &self.failures {
            out.push_str("\n- ");
            out.push_str(&failure.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathSegment, StructuralPath};

    #[test]
    fn unknown_suite_line_carries_literal_value() {
        let failure = FixtureFailure::UnknownSuite {
            path: "contracts/fixtures/bad.json".to_string(),
            suite: "nope".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "contracts/fixtures/bad.json: unknown suite 'nope'"
        );
    }

    #[test]
    fn invalid_json_line_embeds_parser_detail() {
        let failure = FixtureFailure::InvalidJson {
            path: "contracts/fixtures/broken.json".to_string(),
            detail: "expected value at line 2 column 9".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "contracts/fixtures/broken.json: invalid JSON (expected value at line 2 column 9)"
        );
    }

    #[test]
    fn violation_line_is_path_location_message() {
        let failure = FixtureFailure::Violation {
            path: "contracts/fixtures/m.json".to_string(),
            location: StructuralPath::from_segments(vec![PathSegment::Key("id".to_string())]),
            message: "123 is not of type \"string\"".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "contracts/fixtures/m.json [id]: 123 is not of type \"string\""
        );
    }

    #[test]
    fn root_violation_is_labeled_root() {
        let failure = FixtureFailure::Violation {
            path: "f.json".to_string(),
            location: StructuralPath::root(),
            message: "\"suite\" is a required property".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "f.json [<root>]: \"suite\" is a required property"
        );
    }

    #[test]
    fn successful_report_prints_discovered_count() {
        let report = RunReport {
            discovered: 3,
            failures: Vec::new(),
        };
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.render(), "Validated 3 contract fixture(s) successfully.");
    }

    #[test]
    fn failing_report_lists_every_failure() {
        let mut report = RunReport {
            discovered: 2,
            failures: Vec::new(),
        };
        report.record(FixtureFailure::UnknownSuite {
            path: "a.json".to_string(),
            suite: "x".to_string(),
        });
        report.record(FixtureFailure::InvalidJson {
            path: "b.json".to_string(),
            detail: "EOF while parsing a value at line 1 column 0".to_string(),
        });
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report.render(),
            "Contract validation failed:\n\
             \n\
             - a.json: unknown suite 'x'\n\
             - b.json: invalid JSON (EOF while parsing a value at line 1 column 0)"
        );
    }

    #[test]
    fn empty_run_is_a_success_of_zero() {
        let report = RunReport::default();
        assert_eq!(report.render(), "Validated 0 contract fixture(s) successfully.");
        assert_eq!(report.exit_code(), 0);
    }
}
