//! Share commitments.
//!
//! A blob is split into its share run, the run is cut into power-of-two
//! subtrees (see [`SubtreePlan`]), every subtree is hashed into a namespaced
//! Merkle root and the ordered subtree digests are folded into one 32-byte
//! commitment by a [`RootCombinator`].

use std::fmt;

use inclusion_costs::{
    CostResult, CostsExt, OperationCost, collect_costs, cost_return_on_error,
    cost_return_on_error_no_add,
};
use inclusion_nmt::{
    HASH_SIZE, Hash, MerkleHasher, NAMESPACE_SIZE, NamespaceMerkleTree, NamespacedHash,
    PlainMerkleRoot, RootCombinator, Sha256Hasher,
};
use inclusion_share::{Blob, SHARE_SIZE, Share, split_blob};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{CommitmentConfig, Error, SubtreePlan};

/// A 32-byte share commitment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Commitment([u8; HASH_SIZE]);

impl Commitment {
    /// Wrap raw commitment bytes.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Commitment(bytes)
    }

    /// The commitment bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Copy the commitment bytes out.
    pub fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl From<[u8; HASH_SIZE]> for Commitment {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Commitment(bytes)
    }
}

impl From<Commitment> for [u8; HASH_SIZE] {
    fn from(commitment: Commitment) -> Self {
        commitment.0
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(self.0))
    }
}

/// Namespaced root of one subtree of shares.
///
/// Each share enters the tree as `namespace || share bytes`.
fn chunk_root<H: MerkleHasher>(chunk: &[Share]) -> CostResult<NamespacedHash, Error> {
    let mut cost = OperationCost::default();
    let mut tree = NamespaceMerkleTree::<H>::with_capacity(chunk.len());
    let mut leaf = Vec::with_capacity(NAMESPACE_SIZE + SHARE_SIZE);
    for share in chunk {
        leaf.clear();
        leaf.extend_from_slice(share.namespace().as_bytes());
        leaf.extend_from_slice(share.as_bytes());
        cost_return_on_error!(&mut cost, tree.push(&leaf));
    }
    tree.root().add_cost(cost).map_err(Error::from)
}

/// Namespaced Merkle roots of the subtrees a share run is cut into, in share
/// order.
///
/// With the `parallel` feature the subtrees are hashed on the rayon pool; the
/// result and its cost are the same either way.
pub fn subtree_roots<H: MerkleHasher>(
    shares: &[Share],
    threshold: u64,
) -> CostResult<Vec<NamespacedHash>, Error> {
    let mut cost = OperationCost::default();
    let plan = cost_return_on_error_no_add!(&cost, SubtreePlan::new(shares.len(), threshold));
    let chunks: Vec<&[Share]> = plan.chunk_ranges().map(|range| &shares[range]).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<CostResult<NamespacedHash, Error>> = chunks
        .par_iter()
        .map(|chunk| chunk_root::<H>(chunk))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<CostResult<NamespacedHash, Error>> = chunks
        .iter()
        .map(|chunk| chunk_root::<H>(chunk))
        .collect();

    let roots = cost_return_on_error!(&mut cost, collect_costs(results));
    trace!(
        hasher = H::NAME,
        shares = shares.len(),
        width = plan.width(),
        subtrees = roots.len(),
        "computed subtree roots"
    );
    Ok(roots).wrap_with_cost(cost)
}

/// Commitment over an already split share run.
///
/// The shares are expected to be one blob's run; their namespaces must be
/// non-decreasing.
pub fn commitment_from_shares<H: MerkleHasher, C: RootCombinator>(
    shares: &[Share],
    threshold: u64,
    combinator: &C,
) -> CostResult<Commitment, Error> {
    let mut cost = OperationCost::default();
    let roots = cost_return_on_error!(&mut cost, subtree_roots::<H>(shares, threshold));
    let digests: Vec<Hash> = roots.iter().map(NamespacedHash::digest).collect();
    let root = cost_return_on_error!(&mut cost, combinator.combine(&digests));
    Ok(Commitment(root)).wrap_with_cost(cost)
}

/// Commitment of `blob` using SHA-256 and the plain Merkle root.
pub fn create_commitment(blob: &Blob, config: &CommitmentConfig) -> CostResult<Commitment, Error> {
    create_commitment_with::<Sha256Hasher, _>(blob, config, &PlainMerkleRoot::<Sha256Hasher>::new())
}

/// Commitment of `blob` with a chosen hash function for the namespaced
/// subtrees and a chosen combinator for their roots.
///
/// Fails before any hashing when the config is invalid or the blob is longer
/// than `config.max_blob_size`.
pub fn create_commitment_with<H: MerkleHasher, C: RootCombinator>(
    blob: &Blob,
    config: &CommitmentConfig,
    combinator: &C,
) -> CostResult<Commitment, Error> {
    let mut cost = OperationCost::default();
    cost_return_on_error_no_add!(&cost, config.validate());
    let shares = cost_return_on_error_no_add!(&cost, split_blob(blob, config.max_blob_size));
    let commitment = cost_return_on_error!(
        &mut cost,
        commitment_from_shares::<H, C>(&shares, config.subtree_root_threshold, combinator)
    );
    debug!(
        namespace = %blob.namespace(),
        blob_len = blob.len(),
        shares = shares.len(),
        hash_calls = cost.hash_calls(),
        commitment = %commitment,
        "created share commitment"
    );
    Ok(commitment).wrap_with_cost(cost)
}

/// Commitments of several blobs, in input order.
///
/// Stops at the first blob that fails.
pub fn create_commitments(
    blobs: &[Blob],
    config: &CommitmentConfig,
) -> CostResult<Vec<Commitment>, Error> {
    let mut cost = OperationCost::default();
    let mut commitments = Vec::with_capacity(blobs.len());
    for blob in blobs {
        commitments.push(cost_return_on_error!(
            &mut cost,
            create_commitment(blob, config)
        ));
    }
    Ok(commitments).wrap_with_cost(cost)
}
