use thiserror::Error;

/// Errors that may rise when building or assembling Y2000 records.
/// Malformed fields never rise an [Error] when parsing: they are
/// simply left out of the record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Value rejected by a setter
    #[error("{0} out of range: {1}")]
    OutOfRange(&'static str, f64),
    /// A field required by this operation is missing
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// Content cannot be interpreted as a record at all
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
