//! Observation records from the event query backend

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::advisor::error::MalformedObservationError;

/// Project identifier as issued by the organization layer.
pub type ProjectId = u64;

/// One row as returned by the event query backend.
///
/// Field names mirror the query's selected columns. Rows can be ragged
/// (aggregation gaps, schema drift), so every field is optional until
/// validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    #[serde(rename = "project.id")]
    pub project_id: Option<ProjectId>,
    #[serde(rename = "sdk.name")]
    pub sdk_name: Option<String>,
    #[serde(rename = "sdk.version")]
    pub sdk_version: Option<String>,
    #[serde(rename = "last_seen()")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// A validated observation: one (project, sdk name, sdk version, last seen)
/// record scoped to the request's time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub project_id: ProjectId,
    pub sdk_name: String,
    pub sdk_version: String,
    pub last_seen: DateTime<Utc>,
}

impl RawObservation {
    /// Validate that every required field is present.
    ///
    /// The error names the first missing field; callers drop and count such
    /// rows rather than failing the request.
    pub fn validate(self) -> Result<Observation, MalformedObservationError> {
        let missing = |field| MalformedObservationError { field };

        Ok(Observation {
            project_id: self.project_id.ok_or_else(|| missing("project.id"))?,
            sdk_name: self.sdk_name.ok_or_else(|| missing("sdk.name"))?,
            sdk_version: self.sdk_version.ok_or_else(|| missing("sdk.version"))?,
            last_seen: self.last_seen.ok_or_else(|| missing("last_seen()"))?,
        })
    }
}
