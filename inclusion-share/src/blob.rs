use crate::{Namespace, Result, share::validate_signer, splitter::sparse_shares_needed};

/// A user-submitted payload bound to a namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    namespace: Namespace,
    data: Vec<u8>,
    share_version: u8,
    signer: Option<Vec<u8>>,
}

impl Blob {
    /// Create a blob.
    ///
    /// The namespace must be usable for blobs; share version 0 takes no
    /// signer and share version 1 requires a 20-byte one.
    pub fn new(
        namespace: Namespace,
        data: Vec<u8>,
        share_version: u8,
        signer: Option<Vec<u8>>,
    ) -> Result<Self> {
        namespace.validate_for_blob()?;
        validate_signer(share_version, signer.as_deref())?;
        Ok(Blob {
            namespace,
            data,
            share_version,
            signer,
        })
    }

    /// Reassemble a blob recovered from shares. The namespace may be any
    /// namespace a share can carry.
    pub(crate) fn from_parts(
        namespace: Namespace,
        data: Vec<u8>,
        share_version: u8,
        signer: Option<Vec<u8>>,
    ) -> Self {
        Blob {
            namespace,
            data,
            share_version,
            signer,
        }
    }

    /// The blob namespace.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the blob and return its payload.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The share version used to encode this blob.
    pub fn share_version(&self) -> u8 {
        self.share_version
    }

    /// The signer, for share version 1.
    pub fn signer(&self) -> Option<&[u8]> {
        self.signer.as_deref()
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of shares a sparse split of this blob produces.
    pub fn shares_needed(&self) -> usize {
        sparse_shares_needed(self.data.len(), self.share_version)
    }
}
