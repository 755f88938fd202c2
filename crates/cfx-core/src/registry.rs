//! # Suite Registry
//!
//! The fixed mapping from a fixture's declared suite identifier to the
//! schema file that governs it. The registry encodes which schema governs
//! which contract category; it is maintained by hand alongside the schema
//! files and is not derived from the fixtures or schemas at runtime.
//!
//! A suite present in fixtures but missing here is a fixture-level
//! failure, never an abort: the run must surface every drifted fixture in
//! one pass.

use std::collections::HashMap;

/// The production suites and the schema file governing each.
///
/// Kept in sync with `contracts/schemas/`. Adding a suite means adding a
/// schema file and one row here.
const BUILTIN_SUITES: &[(&str, &str)] = &[
    ("player_machine", "player_machine.schema.json"),
    ("media_ids", "media_ids.schema.json"),
    ("id_prefixes", "id_prefixes.schema.json"),
    ("catalog_url_building", "catalog_url_building.schema.json"),
    ("search_ranking_and_dedup", "search_ranking_and_dedup.schema.json"),
    ("metadata_addon_primary", "metadata_addon_primary.schema.json"),
    ("metadata_tmdb_enhancer", "metadata_tmdb_enhancer.schema.json"),
    ("sync_planner", "sync_planner.schema.json"),
    ("storage_v1", "storage_v1.schema.json"),
    ("continue_watching", "continue_watching.schema.json"),
    ("trakt_scrobble_policy", "trakt_scrobble_policy.schema.json"),
];

/// Immutable suite-to-schema lookup table.
///
/// Constructed once at process start and passed explicitly to the report
/// aggregator. Lookup is constant-time and side-effect free.
#[derive(Debug, Clone)]
pub struct SuiteRegistry {
    entries: HashMap<String, String>,
}

impl SuiteRegistry {
    /// The production registry covering the full contract corpus.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_SUITES
                .iter()
                .map(|(suite, schema)| ((*suite).to_string(), (*schema).to_string())),
        )
    }

    /// Build a registry from arbitrary entries.
    ///
    /// Used by tests to inject reduced or alternate registries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolve a suite identifier to its governing schema file name.
    ///
    /// Returns `None` for identifiers the registry does not know; the
    /// caller records that as a fixture-level failure.
    pub fn resolve(&self, suite: &str) -> Option<&str> {
        self.entries.get(suite).map(String::as_str)
    }

    /// Number of registered suites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered schema file names, sorted and deduplicated.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// All registered suite identifiers, sorted.
    pub fn suites(&self) -> Vec<&str> {
        let mut suites: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        suites.sort_unstable();
        suites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_total() {
        let registry = SuiteRegistry::builtin();
        assert_eq!(registry.len(), 11);
        for suite in registry.suites() {
            let schema = registry.resolve(suite).expect("builtin suite must resolve");
            assert!(
                schema.ends_with(".schema.json"),
                "{suite} maps to unexpected schema name {schema}"
            );
        }
    }

    #[test]
    fn builtin_schema_names_follow_suite_names() {
        let registry = SuiteRegistry::builtin();
        assert_eq!(
            registry.resolve("storage_v1"),
            Some("storage_v1.schema.json")
        );
        assert_eq!(registry.resolve("media_ids"), Some("media_ids.schema.json"));
    }

    #[test]
    fn unknown_suite_resolves_to_none() {
        let registry = SuiteRegistry::builtin();
        assert_eq!(registry.resolve("nope"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn injected_registry_overrides_builtin() {
        let registry = SuiteRegistry::from_entries([(
            "custom".to_string(),
            "custom.schema.json".to_string(),
        )]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("custom"), Some("custom.schema.json"));
        assert_eq!(registry.resolve("storage_v1"), None);
    }

    #[test]
    fn empty_registry_is_empty() {
        let registry = SuiteRegistry::from_entries(std::iter::empty());
        assert!(registry.is_empty());
        assert!(registry.schema_names().is_empty());
    }
}
