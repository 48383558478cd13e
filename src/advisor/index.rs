//! In-memory `VersionIndex` backing
//!
//! Reference implementation of the index capability for fixtures and tests.
//! Production deployments are expected to swap in a service-backed
//! implementation; the advisory core only ever sees the trait.

use std::collections::HashMap;

use serde::Deserialize;

use crate::advisor::error::IndexError;
use crate::advisor::suggest::VersionIndex;
use crate::version::ParsedVersion;

/// Known versions and deprecation facts for one SDK.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SdkIndexEntry {
    /// All versions the index knows about, in no particular order.
    pub versions: Vec<ParsedVersion>,
    /// Versions pulled or otherwise flagged as not to be used.
    pub deprecated: Vec<ParsedVersion>,
}

/// In-memory table of SDK version facts, keyed by sdk name.
///
/// Deserializes from the fixture format
/// `{"sentry.python": {"versions": [...], "deprecated": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SdkIndex {
    entries: HashMap<String, SdkIndexEntry>,
}

impl SdkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an SDK with its known and deprecated versions.
    pub fn with_sdk(mut self, sdk_name: &str, versions: &[&str], deprecated: &[&str]) -> Self {
        self.entries.insert(
            sdk_name.to_string(),
            SdkIndexEntry {
                versions: versions.iter().map(|v| ParsedVersion::parse(v)).collect(),
                deprecated: deprecated.iter().map(|v| ParsedVersion::parse(v)).collect(),
            },
        );
        self
    }
}

#[async_trait::async_trait]
impl VersionIndex for SdkIndex {
    async fn latest_known_version(
        &self,
        sdk_name: &str,
    ) -> Result<Option<ParsedVersion>, IndexError> {
        Ok(self
            .entries
            .get(sdk_name)
            .and_then(|entry| entry.versions.iter().max().cloned()))
    }

    async fn deprecated(
        &self,
        sdk_name: &str,
        version: &ParsedVersion,
    ) -> Result<bool, IndexError> {
        Ok(self
            .entries
            .get(sdk_name)
            .is_some_and(|entry| entry.deprecated.contains(version)))
    }

    async fn next_non_deprecated(
        &self,
        sdk_name: &str,
        after: &ParsedVersion,
    ) -> Result<Option<ParsedVersion>, IndexError> {
        Ok(self.entries.get(sdk_name).and_then(|entry| {
            entry
                .versions
                .iter()
                .filter(|v| *v > after && !entry.deprecated.contains(v))
                .min()
                .cloned()
        }))
    }
}
