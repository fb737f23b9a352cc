//! Commitment configuration.

use inclusion_share::{CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, FIRST_SPARSE_SHARE_CONTENT_SIZE};

use crate::{Error, Result};

/// Default bound on the number of subtree roots per blob.
pub const DEFAULT_SUBTREE_ROOT_THRESHOLD: u64 = 64;

/// Width of the square used to derive [`DEFAULT_MAX_BLOB_SIZE`].
pub const DEFAULT_SQUARE_SIZE: usize = 128;

/// Bytes a blob can hold when it fills a whole `DEFAULT_SQUARE_SIZE` square
/// of version-0 shares.
pub const DEFAULT_MAX_BLOB_SIZE: usize = FIRST_SPARSE_SHARE_CONTENT_SIZE
    + (DEFAULT_SQUARE_SIZE * DEFAULT_SQUARE_SIZE - 1) * CONTINUATION_SPARSE_SHARE_CONTENT_SIZE;

/// Tunables of the commitment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommitmentConfig {
    /// Upper bound on the number of subtree roots a blob commitment folds.
    pub subtree_root_threshold: u64,
    /// Longest blob payload accepted, in bytes.
    pub max_blob_size: usize,
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        CommitmentConfig {
            subtree_root_threshold: DEFAULT_SUBTREE_ROOT_THRESHOLD,
            max_blob_size: DEFAULT_MAX_BLOB_SIZE,
        }
    }
}

impl CommitmentConfig {
    /// Set the subtree root threshold.
    pub fn with_subtree_root_threshold(mut self, threshold: u64) -> Self {
        self.subtree_root_threshold = threshold;
        self
    }

    /// Set the maximum blob size.
    pub fn with_max_blob_size(mut self, max_blob_size: usize) -> Self {
        self.max_blob_size = max_blob_size;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.subtree_root_threshold == 0 {
            return Err(Error::InvalidConfig(
                "subtree root threshold must be positive".into(),
            ));
        }
        if self.max_blob_size > u32::MAX as usize {
            return Err(Error::InvalidConfig(format!(
                "max blob size {} does not fit the 4-byte sequence length",
                self.max_blob_size
            )));
        }
        Ok(())
    }
}
