//! Latest-version reduction over raw observations

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::warn;

use crate::advisor::observation::{Observation, ProjectId, RawObservation};
use crate::version::ParsedVersion;

/// The latest observed version of one SDK in one project.
///
/// Derived per request from the observation window; exactly one per
/// (project, sdk name) pair that had any valid observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLatestState {
    pub project_id: ProjectId,
    pub sdk_name: String,
    /// Raw version string as observed.
    pub version: String,
    pub parsed: ParsedVersion,
}

/// Outcome of a reduction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// One state per (project, sdk name), sorted by project id then sdk name.
    pub states: Vec<SdkLatestState>,
    /// Malformed rows dropped during validation.
    pub dropped: usize,
}

/// Reduce raw observations to the latest observed version per
/// (project, sdk name).
///
/// Single pass keyed by (project id, sdk name). Winner per key: maximal
/// parsed version; ties broken by latest `last_seen`, then by first
/// encountered input order. Malformed rows are dropped with a warning and
/// counted, never fatal.
///
/// Reduction is idempotent: the same input always yields the same states.
pub fn reduce(raw_observations: Vec<RawObservation>) -> Reduction {
    let mut dropped = 0usize;
    let mut best: HashMap<(ProjectId, String), (Observation, ParsedVersion)> = HashMap::new();

    for raw in raw_observations {
        let observation = match raw.validate() {
            Ok(observation) => observation,
            Err(e) => {
                warn!("dropping malformed observation: {e}");
                dropped += 1;
                continue;
            }
        };

        let parsed = ParsedVersion::parse(&observation.sdk_version);
        let key = (observation.project_id, observation.sdk_name.clone());

        match best.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert((observation, parsed));
            }
            Entry::Occupied(mut slot) => {
                let (current, current_parsed) = slot.get_mut();

                // Strict comparisons keep the first-encountered winner on a
                // full tie.
                let newer_version = parsed > *current_parsed;
                let same_version_seen_later =
                    parsed == *current_parsed && observation.last_seen > current.last_seen;

                if newer_version || same_version_seen_later {
                    *current = observation;
                    *current_parsed = parsed;
                }
            }
        }
    }

    let mut states: Vec<SdkLatestState> = best
        .into_iter()
        .map(|((project_id, sdk_name), (observation, parsed))| SdkLatestState {
            project_id,
            sdk_name,
            version: observation.sdk_version,
            parsed,
        })
        .collect();
    states.sort_by(|a, b| {
        (a.project_id, a.sdk_name.as_str()).cmp(&(b.project_id, b.sdk_name.as_str()))
    });

    Reduction { states, dropped }
}
