//! # Schema Store
//!
//! Lazy, memoized loading of governing schemas by file name. The first
//! `load` for a name reads `<schemas_dir>/<name>`, parses it, and
//! compiles it under Draft 2020-12; every later `load` for that name
//! returns the cached compiled schema.
//!
//! Any store error is run-fatal: a missing or corrupt schema is a defect
//! in the harness's own configuration, and aborting immediately avoids a
//! flood of misleading per-fixture failures. Fixture-level problems are
//! never reported from here.
//!
//! The cache is a mutex-guarded map and the lock is held across the
//! load, so exactly one load per name happens even if fixtures are ever
//! validated concurrently. Schemas are immutable for the duration of a
//! run; there is no invalidation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jsonschema::Validator;
use parking_lot::Mutex;
use serde_json::Value;
use thiserror::Error;

use crate::engine;

/// Run-fatal schema configuration error.
#[derive(Error, Debug)]
pub enum SchemaStoreError {
    /// The schema file could not be read from disk.
    #[error("schema '{name}' could not be read from {path}: {reason}")]
    Unreadable {
        /// Schema file name as referenced by the registry.
        name: String,
        /// Full path the store attempted to read.
        path: String,
        /// Operating-system error description.
        reason: String,
    },

    /// The schema file is not syntactically valid JSON.
    #[error("schema '{name}' is not valid JSON: {reason}")]
    Malformed {
        /// Schema file name as referenced by the registry.
        name: String,
        /// Parser message with position information.
        reason: String,
    },

    /// The schema parsed but is not a compilable Draft 2020-12 schema.
    #[error("schema '{name}' failed to compile: {reason}")]
    Uncompilable {
        /// Schema file name as referenced by the registry.
        name: String,
        /// Engine compile error.
        reason: String,
    },
}

/// Memoizing loader for compiled schema documents.
///
/// Owns every schema for the duration of a run. Compiled schemas are
/// shared out as `Arc<Validator>` and never mutated after load.
pub struct SchemaStore {
    /// Directory holding one `<name>.schema.json` per registry entry.
    schemas_dir: PathBuf,
    /// Compiled-schema cache, keyed by schema file name.
    cache: Mutex<HashMap<String, Arc<Validator>>>,
    /// Number of disk loads performed; observable for cache-hit tests.
    loads: AtomicUsize,
}

impl std::fmt::Debug for SchemaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaStore")
            .field("schemas_dir", &self.schemas_dir)
            .field("cached", &self.cache.lock().len())
            .field("loads", &self.loads.load(Ordering::Relaxed))
            .finish()
    }
}

impl SchemaStore {
    /// Create a store backed by the given schemas directory.
    ///
    /// No I/O happens here; schemas load on first use.
    pub fn new(schemas_dir: impl Into<PathBuf>) -> Self {
        Self {
            schemas_dir: schemas_dir.into(),
            cache: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// The directory this store reads schemas from.
    pub fn schemas_dir(&self) -> &Path {
        &self.schemas_dir
    }

    /// Number of disk loads performed so far.
    ///
    /// Stays at one per distinct schema name regardless of how many
    /// fixtures reference it.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Fetch the compiled schema for `name`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaStoreError`] if the schema file is missing,
    /// unparseable, or uncompilable. The caller must treat this as fatal
    /// for the whole run.
    pub fn load(&self, name: &str) -> Result<Arc<Validator>, SchemaStoreError> {
        let mut cache = self.cache.lock();
        if let Some(compiled) = cache.get(name) {
            return Ok(Arc::clone(compiled));
        }

        let compiled = Arc::new(self.load_from_disk(name)?);
        cache.insert(name.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Read, parse, and compile a schema file. Called with the cache
    /// lock held.
    fn load_from_disk(&self, name: &str) -> Result<Validator, SchemaStoreError> {
        let path = self.schemas_dir.join(name);
        tracing::debug!(schema = name, path = %path.display(), "loading schema");
        self.loads.fetch_add(1, Ordering::Relaxed);

        let content =
            std::fs::read_to_string(&path).map_err(|e| SchemaStoreError::Unreadable {
                name: name.to_string(),
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| SchemaStoreError::Malformed {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        engine::compile(&document).map_err(|reason| SchemaStoreError::Uncompilable {
            name: name.to_string(),
            reason,
        })
    }
}
