use tracing::debug;

use crate::{
    Blob, Error, Namespace, Result, Share,
    constants::{CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, first_sparse_share_content_size},
};

/// Number of shares a sparse split of `len` payload bytes produces.
pub fn sparse_shares_needed(len: usize, share_version: u8) -> usize {
    let first = first_sparse_share_content_size(share_version);
    if len <= first {
        return 1;
    }
    1 + (len - first).div_ceil(CONTINUATION_SPARSE_SHARE_CONTENT_SIZE)
}

/// Split one blob into its share run.
///
/// Fails with [`Error::BlobTooLarge`] when the payload is longer than
/// `max_blob_size` or does not fit the 4-byte length field.
pub fn split_blob(blob: &Blob, max_blob_size: usize) -> Result<Vec<Share>> {
    let mut splitter = SparseShareSplitter::with_max_blob_size(max_blob_size);
    splitter.write(blob)?;
    Ok(splitter.export())
}

/// Writes blobs into shares, each blob starting on a fresh share.
#[derive(Debug, Clone)]
pub struct SparseShareSplitter {
    shares: Vec<Share>,
    max_blob_size: usize,
}

impl Default for SparseShareSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SparseShareSplitter {
    /// Create a splitter bounded only by the 4-byte length field.
    pub fn new() -> Self {
        Self::with_max_blob_size(u32::MAX as usize)
    }

    /// Create a splitter that rejects blobs longer than `max_blob_size`.
    pub fn with_max_blob_size(max_blob_size: usize) -> Self {
        SparseShareSplitter {
            shares: Vec::new(),
            max_blob_size: max_blob_size.min(u32::MAX as usize),
        }
    }

    /// Append the share run of `blob`.
    ///
    /// Nothing is written when the blob is rejected.
    pub fn write(&mut self, blob: &Blob) -> Result<()> {
        let data = blob.data();
        if data.len() > self.max_blob_size {
            return Err(Error::BlobTooLarge {
                len: data.len(),
                max: self.max_blob_size,
            });
        }
        let sequence_len = u32::try_from(data.len()).map_err(|_| Error::BlobTooLarge {
            len: data.len(),
            max: u32::MAX as usize,
        })?;

        let namespace = blob.namespace();
        let version = blob.share_version();
        let first_len = data.len().min(first_sparse_share_content_size(version));
        let (first, rest) = data.split_at(first_len);

        let mut run = Vec::with_capacity(blob.shares_needed());
        run.push(Share::encode_sequence_start_signed(
            namespace,
            version,
            sequence_len,
            blob.signer(),
            first,
        )?);
        for chunk in rest.chunks(CONTINUATION_SPARSE_SHARE_CONTENT_SIZE) {
            run.push(Share::encode_continuation(namespace, version, chunk)?);
        }

        debug!(
            namespace = %namespace,
            blob_len = data.len(),
            shares = run.len(),
            "split blob into shares"
        );
        self.shares.append(&mut run);
        Ok(())
    }

    /// Append `count` namespace padding shares.
    pub fn write_namespace_padding_shares(&mut self, namespace: Namespace, count: usize) {
        self.shares
            .extend(std::iter::repeat_n(Share::namespace_padding(namespace), count));
    }

    /// Number of shares written so far.
    pub fn count(&self) -> usize {
        self.shares.len()
    }

    /// Consume the splitter and return the written shares.
    pub fn export(self) -> Vec<Share> {
        self.shares
    }
}
