use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from planning and computing a share commitment.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Namespace, blob or share validation failed.
    #[error(transparent)]
    Share(#[from] inclusion_share::Error),
    /// Merkle root computation failed, including an empty set of roots.
    #[error(transparent)]
    Merkle(#[from] inclusion_nmt::Error),
    /// Bad subtree width, threshold or share count.
    #[error("invalid subtree plan: {0}")]
    InvalidPlan(String),
    /// Configuration values out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
