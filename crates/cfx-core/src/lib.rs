//! # cfx-core — Foundational Types for the Contract Fixture Harness
//!
//! This crate defines the vocabulary shared by the rest of the workspace:
//! structural paths into JSON documents, the suite-to-schema registry, the
//! fixture failure taxonomy, and the run report. Every other crate depends
//! on `cfx-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Typed structural paths.** Violation locations are sequences of
//!    [`PathSegment`] values, not raw strings, so array indices order
//!    numerically and report ordering is deterministic across runs.
//!
//! 2. **The registry is a value, not a global.** [`SuiteRegistry`] is
//!    constructed once at process start and passed explicitly to the
//!    aggregator, so tests can inject alternate registries.
//!
//! 3. **Failures are data until the very end.** A [`FixtureFailure`] is
//!    collected, never thrown; it renders to exactly one report line.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cfx-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod path;
pub mod registry;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use path::{PathSegment, StructuralPath};
pub use registry::SuiteRegistry;
pub use report::{FixtureFailure, RunReport};
