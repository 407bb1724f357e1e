use crate::write::hints;

use aws_sdk_dynamodb::types;

/// Errors raised while converting values, items and hints.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute with no recognised case populated.
    ///
    /// Decoding is aborted for the containing item: this signals corrupted
    /// data or a client that is newer than this crate, and is not retryable.
    #[error("unknown DynamoDB attribute: {0:?}")]
    UnknownAttribute(types::AttributeValue),
    /// A hinted attribute whose value is not a sequence of the hinted element type.
    #[error("attribute `{name}` is hinted as {hint} but its value is not a matching sequence")]
    HintShapeMismatch {
        /// The attribute name.
        name: String,
        /// The hint applied to it.
        hint: hints::Hint,
    },
    /// A hint tag other than `SS` or `NS`.
    #[error("unknown attribute hint: {0:?}")]
    UnknownHint(String),
    /// A number attribute whose text is not a finite number.
    #[error("invalid DynamoDB number: {0:?}")]
    InvalidNumber(String),
    /// A typed record that does not serialize to a mapping.
    #[error("value is not an object and cannot be converted to an item")]
    NotAnObject,
    /// A typed record failed to serialize or deserialize.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for conversions.
pub type Result<T, E = Error> = std::result::Result<T, E>;
