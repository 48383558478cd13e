//! Version parsing and ordering
//!
//! SDK version strings reported by event telemetry are not guaranteed to be
//! well formed, so [`parsed::ParsedVersion`] defines a total order that never
//! rejects input: exact numeric versions compare component-wise and malformed
//! ones fall back to a degraded key that sorts below all of them.

pub mod parsed;

pub use parsed::ParsedVersion;
