//! # cfx-schema — Schema Store & Validation Boundary
//!
//! Owns the two schema-facing concerns of the harness:
//!
//! - [`store`] — the [`SchemaStore`]: lazy, memoized loading and
//!   compilation of JSON Schema (Draft 2020-12) documents by file name.
//!   One load per distinct schema name per run; an unreadable or invalid
//!   schema is a run-fatal [`SchemaStoreError`].
//! - [`engine`] — the consumption boundary for the `jsonschema` crate:
//!   turns its error stream into [`Violation`]s sorted by structural
//!   path. The harness implements no schema semantics itself.
//!
//! ## Crate Policy
//!
//! - Depends only on `cfx-core` internally.
//! - Compiled schemas are immutable after load and shared via `Arc`.
//! - Fixture-level failures never originate here; everything this crate
//!   returns as `Err` aborts the run.

pub mod engine;
pub mod store;

pub use engine::{check, compile, Violation};
pub use store::{SchemaStore, SchemaStoreError};
