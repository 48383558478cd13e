//! SDK update advisory pipeline
//!
//! Turns a window of raw (project, sdk name, sdk version, last seen)
//! observations into per-project upgrade suggestions:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Observation │────▶│   Reducer    │────▶│   Suggest    │
//! │  (validate)  │     │ (latest ver) │     │ (vs. index)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                       ┌──────────────┐           ▼
//!                       │ Orchestrator │◀── VersionIndex
//!                       │  (assemble)  │    (external)
//!                       └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`observation`]: raw query rows and their validation
//! - [`reducer`]: latest-version reduction per (project, sdk name)
//! - [`suggest`]: the [`suggest::VersionIndex`] capability and the reference
//!   suggestion evaluator
//! - [`index`]: in-memory index backing for fixtures and tests
//! - [`orchestrator`]: per-request assembly of the advisory
//! - [`error`]: soft-failure error taxonomy

pub mod error;
pub mod index;
pub mod observation;
pub mod orchestrator;
pub mod reducer;
pub mod suggest;
