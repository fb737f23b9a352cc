use tracing::trace;

use crate::{
    Blob, Error, Namespace, Result, Share, constants::CONTINUATION_SPARSE_SHARE_CONTENT_SIZE,
};

/// A blob being reassembled from its share run.
struct PendingBlob {
    namespace: Namespace,
    share_version: u8,
    signer: Option<Vec<u8>>,
    sequence_len: usize,
    data: Vec<u8>,
}

impl PendingBlob {
    fn is_complete(&self) -> bool {
        self.data.len() >= self.sequence_len
    }

    fn finish(mut self) -> Blob {
        self.data.truncate(self.sequence_len);
        Blob::from_parts(self.namespace, self.data, self.share_version, self.signer)
    }
}

/// Reassemble the blobs encoded in a sequence of sparse shares.
///
/// Runs in reserved namespaces (padding, parity) are skipped. Every other run
/// yields one blob, including zero-length runs. Fails with
/// [`Error::MalformedShare`] when a run starts with a continuation share, is
/// interrupted by another namespace, share version or sequence start, or
/// declares more bytes than the remaining shares can hold.
pub fn parse_sparse_shares(shares: &[Share]) -> Result<Vec<Blob>> {
    let mut blobs = Vec::new();
    let mut pending: Option<PendingBlob> = None;

    for (index, share) in shares.iter().enumerate() {
        let namespace = share.namespace();
        if share.is_sequence_start() {
            if let Some(unfinished) = pending.take() {
                return Err(Error::MalformedShare(format!(
                    "share {} starts a new sequence but the previous one holds {} of {} bytes",
                    index,
                    unfinished.data.len(),
                    unfinished.sequence_len
                )));
            }
            if namespace.is_reserved() {
                trace!(index, namespace = %namespace, "skipping reserved namespace share");
                continue;
            }
            let sequence_len = share.sequence_len()? as usize;
            let room = share.payload().len()
                + (shares.len() - index - 1) * CONTINUATION_SPARSE_SHARE_CONTENT_SIZE;
            if sequence_len > room {
                return Err(Error::MalformedShare(format!(
                    "share {} declares {} bytes but the remaining shares hold at most {}",
                    index, sequence_len, room
                )));
            }
            let mut data = Vec::with_capacity(sequence_len);
            data.extend_from_slice(share.payload());
            let started = PendingBlob {
                namespace,
                share_version: share.info().version(),
                signer: share.signer().map(<[u8]>::to_vec),
                sequence_len,
                data,
            };
            if started.is_complete() {
                blobs.push(started.finish());
            } else {
                pending = Some(started);
            }
        } else {
            if namespace.is_reserved() && pending.is_none() {
                continue;
            }
            let Some(mut current) = pending.take() else {
                return Err(Error::MalformedShare(format!(
                    "share {} continues a sequence that was never started",
                    index
                )));
            };
            if current.namespace != namespace {
                return Err(Error::MalformedShare(format!(
                    "share {} has namespace {} inside a sequence of namespace {}",
                    index, namespace, current.namespace
                )));
            }
            let version = share.info().version();
            if current.share_version != version {
                return Err(Error::MalformedShare(format!(
                    "share {} has share version {} inside a sequence of share version {}",
                    index, version, current.share_version
                )));
            }
            current.data.extend_from_slice(share.payload());
            if current.is_complete() {
                blobs.push(current.finish());
            } else {
                pending = Some(current);
            }
        }
    }

    if let Some(unfinished) = pending {
        return Err(Error::MalformedShare(format!(
            "shares end with {} of {} declared bytes",
            unfinished.data.len(),
            unfinished.sequence_len
        )));
    }
    Ok(blobs)
}
