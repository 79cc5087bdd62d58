use thiserror::Error;

/// Errors returned when reading typed values out of an attribute tree.
///
/// # Examples
/// ```
/// use hrdscope_core::tree::TreeError;
///
/// let err = TreeError::MissingAttribute {
///     element: "AVC_timing_and_HRD_descriptor".to_string(),
///     attribute: "temporal_poc".to_string(),
/// };
/// assert!(err.to_string().contains("missing attribute"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("<{element}>: missing attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },
    #[error("<{element}>: attribute '{attribute}' has malformed value '{value}', expected {expected}")]
    MalformedValue {
        element: String,
        attribute: String,
        value: String,
        expected: String,
    },
    #[error("unexpected element <{actual}>, expected <{expected}>")]
    UnexpectedElement { expected: String, actual: String },
}
