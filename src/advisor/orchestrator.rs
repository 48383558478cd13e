//! Advisory orchestration: reduce, evaluate, assemble

use futures::StreamExt;
use futures::stream;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::advisor::error::PartialDataError;
use crate::advisor::observation::{ProjectId, RawObservation};
use crate::advisor::reducer::reduce;
use crate::advisor::suggest::{Suggestion, VersionIndex, suggest};
use crate::config::AdvisorConfig;

/// The assembled advisory for one request.
///
/// Every requested project id is present as a key, empty when the project had
/// no valid observations or nothing to suggest. Constructed fresh per
/// request, never cached or mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// Per-project suggestions, projects in ascending id order, suggestions
    /// ordered by sdk name ascending (ties by discovery order).
    pub projects: IndexMap<ProjectId, Vec<Suggestion>>,
    /// Malformed observation rows the reducer dropped.
    pub dropped_observations: usize,
}

impl Advisory {
    /// Soft warning when the advisory was built from partial data. The
    /// result itself is still valid for every surviving record.
    pub fn partial_data(&self) -> Option<PartialDataError> {
        (self.dropped_observations > 0).then(|| PartialDataError {
            dropped: self.dropped_observations,
        })
    }
}

/// Build the SDK update advisory for a set of projects.
///
/// Reduces `raw_observations` to the latest version per (project, sdk name),
/// evaluates each against the index concurrently (bounded by
/// `config.max_concurrent_lookups`), and assembles the per-project mapping.
///
/// Soft failure modes: malformed observations are dropped and reported via
/// [`Advisory::partial_data`]; a failed index lookup omits that one SDK's
/// entry. Neither fails the request.
pub async fn build_advisory(
    projects: &[ProjectId],
    raw_observations: Vec<RawObservation>,
    index: &dyn VersionIndex,
    config: &AdvisorConfig,
) -> Advisory {
    let reduction = reduce(raw_observations);
    debug!(
        states = reduction.states.len(),
        dropped = reduction.dropped,
        "reduced observations to latest-version states"
    );

    // Evaluations are independent; only the read-only index is shared.
    // Results are re-slotted by input position so the (project id, sdk name)
    // ordering of the reduction survives the unordered completion.
    let concurrency = config.max_concurrent_lookups.max(1);
    let evaluated = stream::iter(reduction.states.iter().enumerate())
        .map(|(slot, state)| async move { (slot, suggest(state, index).await) })
        .buffer_unordered(concurrency)
        .collect::<Vec<_>>()
        .await;

    let mut per_state: Vec<Vec<Suggestion>> = vec![Vec::new(); reduction.states.len()];
    for (slot, result) in evaluated {
        match result {
            Ok(suggestions) => per_state[slot] = suggestions,
            Err(e) => {
                let state = &reduction.states[slot];
                warn!(
                    project_id = state.project_id,
                    sdk_name = %state.sdk_name,
                    "omitting SDK from advisory, index lookup failed: {e}"
                );
            }
        }
    }

    let mut project_ids: Vec<ProjectId> = projects.to_vec();
    project_ids.sort_unstable();
    project_ids.dedup();

    let mut assembled: IndexMap<ProjectId, Vec<Suggestion>> = project_ids
        .into_iter()
        .map(|project_id| (project_id, Vec::new()))
        .collect();
    for (state, suggestions) in reduction.states.iter().zip(per_state) {
        // States from projects outside the requested set are dropped; the
        // caller's project set is authoritative.
        if let Some(entries) = assembled.get_mut(&state.project_id) {
            entries.extend(suggestions);
        }
    }

    let advisory = Advisory {
        projects: assembled,
        dropped_observations: reduction.dropped,
    };
    if let Some(partial) = advisory.partial_data() {
        warn!("{partial}");
    }
    advisory
}
