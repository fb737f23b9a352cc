use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from Merkle root computation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Tried to compute a root over zero leaves.
    #[error("cannot compute a root over an empty input")]
    EmptyInput,
    /// A leaf was pushed with a namespace smaller than its predecessor's.
    #[error("leaf namespace {pushed} is smaller than the previous leaf namespace {previous}")]
    UnorderedNamespace {
        /// Hex of the last accepted namespace.
        previous: String,
        /// Hex of the rejected namespace.
        pushed: String,
    },
    /// A leaf too short to carry a namespace prefix.
    #[error("invalid leaf: {0}")]
    InvalidLeaf(String),
    /// Serialized node bytes could not be decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
