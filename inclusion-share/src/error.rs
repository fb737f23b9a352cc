use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from namespace, share and blob handling.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Malformed namespace version or identifier.
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),
    /// Blob data longer than the configured maximum.
    #[error("blob of {len} bytes exceeds the maximum of {max} bytes")]
    BlobTooLarge {
        /// Length of the rejected blob.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// Share bytes of the wrong size or with inconsistent fields.
    #[error("malformed share: {0}")]
    MalformedShare(String),
    /// Share version outside the supported set.
    #[error("unsupported share version {0}")]
    UnsupportedShareVersion(u8),
    /// Signer missing, unexpected, or of the wrong size for the share version.
    #[error("invalid signer: {0}")]
    InvalidSigner(String),
}
