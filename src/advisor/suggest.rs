//! Suggestion engine: evaluate a latest-version state against the index

#[cfg(test)]
use mockall::automock;

use serde::Serialize;

use crate::advisor::error::IndexError;
use crate::advisor::reducer::SdkLatestState;
use crate::version::ParsedVersion;

/// Read-only capability over the external index of known SDK versions and
/// deprecation facts.
///
/// The rule data lives entirely behind this trait (in-memory table, remote
/// service, embedded file); implementations must be safe for concurrent
/// reads. Lookups may block on the network, hence async.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionIndex: Send + Sync {
    /// The newest version of an SDK the index knows about, or `None` when the
    /// SDK is unknown to the index.
    async fn latest_known_version(
        &self,
        sdk_name: &str,
    ) -> Result<Option<ParsedVersion>, IndexError>;

    /// Whether a specific version of an SDK has been deprecated (e.g. pulled
    /// for a regression).
    async fn deprecated(
        &self,
        sdk_name: &str,
        version: &ParsedVersion,
    ) -> Result<bool, IndexError>;

    /// The smallest known version strictly greater than `after` that is not
    /// deprecated, or `None` when the index offers no such version.
    async fn next_non_deprecated(
        &self,
        sdk_name: &str,
        after: &ParsedVersion,
    ) -> Result<Option<ParsedVersion>, IndexError>;
}

/// Kind of action a suggestion recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    UpdateSdk,
    /// Reserved for index-driven engines that recommend integration
    /// configuration changes; the reference evaluator never emits it.
    UpdateIntegrationConfig,
    /// Never materialized in output: an up-to-date SDK simply has no entries.
    NoSuggestion,
}

/// A recommended action for one SDK in one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub sdk_name: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_version: Option<ParsedVersion>,
    pub detail: String,
}

/// Evaluate one SDK's latest observed state against the index.
///
/// Policy, in order:
/// 1. SDK unknown to the index: no suggestions (unknown SDKs are not
///    penalized).
/// 2. Observed version older than the index's latest: one `update-sdk`
///    suggestion targeting that latest.
/// 3. Observed version current but deprecated: one `update-sdk` suggestion
///    targeting the next non-deprecated version (target absent when the
///    index offers none).
/// 4. Otherwise: empty — up to date is expressed by absence.
///
/// Deterministic given identical inputs; read-only with respect to the index.
pub async fn suggest(
    state: &SdkLatestState,
    index: &dyn VersionIndex,
) -> Result<Vec<Suggestion>, IndexError> {
    let Some(latest_known) = index.latest_known_version(&state.sdk_name).await? else {
        return Ok(Vec::new());
    };

    if state.parsed < latest_known {
        return Ok(vec![Suggestion {
            sdk_name: state.sdk_name.clone(),
            kind: SuggestionKind::UpdateSdk,
            detail: format!("update {} from {} to {}", state.sdk_name, state.version, latest_known),
            target_version: Some(latest_known),
        }]);
    }

    if index.deprecated(&state.sdk_name, &state.parsed).await? {
        let target = index.next_non_deprecated(&state.sdk_name, &state.parsed).await?;
        let detail = match &target {
            Some(target) => format!(
                "{} {} is deprecated, update to {}",
                state.sdk_name, state.version, target
            ),
            None => format!(
                "{} {} is deprecated and no replacement is indexed yet",
                state.sdk_name, state.version
            ),
        };
        return Ok(vec![Suggestion {
            sdk_name: state.sdk_name.clone(),
            kind: SuggestionKind::UpdateSdk,
            target_version: target,
            detail,
        }]);
    }

    Ok(Vec::new())
}
