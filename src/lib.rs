//! SDK update advisory core
//!
//! Reduces raw SDK observation telemetry to the latest version seen per
//! (project, sdk name) and evaluates each against an external version index
//! to produce per-project upgrade suggestions. The event query, the index
//! rule data, and response transport are external collaborators; this crate
//! owns version ordering, reduction semantics, the suggestion policy, and
//! the per-request assembly.

pub mod advisor;
pub mod config;
pub mod version;

pub use advisor::error::{IndexError, MalformedObservationError, PartialDataError};
pub use advisor::observation::{Observation, ProjectId, RawObservation};
pub use advisor::orchestrator::{Advisory, build_advisory};
pub use advisor::reducer::{Reduction, SdkLatestState, reduce};
pub use advisor::suggest::{Suggestion, SuggestionKind, VersionIndex, suggest};
pub use config::AdvisorConfig;
pub use version::ParsedVersion;
