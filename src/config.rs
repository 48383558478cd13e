use serde::Deserialize;

/// Default bound on concurrent index lookups per request.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Default observation lookback window in days, matching the upstream
/// event-query window.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 1;

/// Advisory pipeline configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisorConfig {
    /// Upper bound on in-flight index lookups while evaluating
    /// (project, sdk) pairs. Values below 1 are treated as 1.
    pub max_concurrent_lookups: usize,
    /// Lookback window callers should apply when querying observations.
    /// The pipeline itself treats the supplied observations as the window.
    pub lookback_days: i64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}
