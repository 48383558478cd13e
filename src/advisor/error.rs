use thiserror::Error;

/// An observation record from the event backend is missing a required field.
///
/// Such records are dropped from the reduction and counted; they never fail
/// the surrounding request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observation missing required field `{field}`")]
pub struct MalformedObservationError {
    /// Name of the missing field as it appears in the source row.
    pub field: &'static str,
}

/// Soft warning that the reducer dropped malformed observation records.
///
/// The advisory it accompanies is still valid for every record that survived;
/// callers log this rather than surfacing it to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("advisory built from partial data: {dropped} malformed observation(s) dropped")]
pub struct PartialDataError {
    pub dropped: usize,
}

/// A version index lookup failed for one SDK.
///
/// The affected SDK's entry is omitted from the result for that project; the
/// rest of the request proceeds.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("version index unavailable: {0}")]
    Unavailable(String),

    #[error("version index lookup failed for `{sdk_name}`: {message}")]
    Lookup { sdk_name: String, message: String },
}
