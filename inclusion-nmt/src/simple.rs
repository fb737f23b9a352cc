//! Plain (non-namespaced) Merkle root over an ordered list of byte strings.
//!
//! - Leaf:     `H(0x00 || item)`
//! - Internal: `H(0x01 || left || right)`
//!
//! A single item yields its leaf hash; the split between subtrees is the
//! largest power of two strictly less than the item count.

use std::marker::PhantomData;

use inclusion_costs::{CostResult, CostsExt, OperationCost};

use crate::{
    Error,
    hasher::{HASH_SIZE, Hash, LEAF_PREFIX, MerkleHasher, NODE_PREFIX, Sha256Hasher},
    helper::split_point,
};

/// Compute the plain Merkle root of `items`, preserving their order.
///
/// Fails with [`Error::EmptyInput`] when `items` is empty.
pub fn merkle_root<H: MerkleHasher, T: AsRef<[u8]>>(items: &[T]) -> CostResult<Hash, Error> {
    if items.is_empty() {
        return Err(Error::EmptyInput).wrap_with_cost(OperationCost::default());
    }
    let mut cost = OperationCost::default();
    let root = root_of::<H, T>(items, &mut cost);
    Ok(root).wrap_with_cost(cost)
}

fn root_of<H: MerkleHasher, T: AsRef<[u8]>>(items: &[T], cost: &mut OperationCost) -> Hash {
    match items {
        [single] => {
            let item = single.as_ref();
            *cost += OperationCost::leaf_hash(1 + item.len());
            let parts: [&[u8]; 2] = [&[LEAF_PREFIX], item];
            H::hash_parts(&parts)
        }
        _ => {
            let (left, right) = items.split_at(split_point(items.len()));
            let left = root_of::<H, T>(left, cost);
            let right = root_of::<H, T>(right, cost);
            *cost += OperationCost::node_hash(1 + 2 * HASH_SIZE);
            let parts: [&[u8]; 3] = [&[NODE_PREFIX], &left, &right];
            H::hash_parts(&parts)
        }
    }
}

/// Folds an ordered list of subtree roots into a single root.
pub trait RootCombinator: Send + Sync {
    /// Combine `roots` in the given order.
    fn combine(&self, roots: &[Hash]) -> CostResult<Hash, Error>;
}

/// [`RootCombinator`] backed by [`merkle_root`].
pub struct PlainMerkleRoot<H: MerkleHasher = Sha256Hasher>(PhantomData<H>);

impl<H: MerkleHasher> PlainMerkleRoot<H> {
    /// Create the combinator.
    pub fn new() -> Self {
        PlainMerkleRoot(PhantomData)
    }
}

impl<H: MerkleHasher> Default for PlainMerkleRoot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MerkleHasher> Clone for PlainMerkleRoot<H> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<H: MerkleHasher> Copy for PlainMerkleRoot<H> {}

impl<H: MerkleHasher> std::fmt::Debug for PlainMerkleRoot<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlainMerkleRoot<{}>", H::NAME)
    }
}

impl<H: MerkleHasher> RootCombinator for PlainMerkleRoot<H> {
    fn combine(&self, roots: &[Hash]) -> CostResult<Hash, Error> {
        merkle_root::<H, Hash>(roots)
    }
}
