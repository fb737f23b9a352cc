//! Namespaced node type and its hashing rules.
//!
//! - Leaf:     `digest = H(0x00 || ns || ns || leaf_bytes)`
//! - Internal: `digest = H(0x01 || min_ns || max_ns || left.digest ||
//!   right.digest)` where `min_ns`/`max_ns` span both children.

use std::fmt;

use inclusion_costs::{CostContext, CostsExt, OperationCost};

use crate::{
    Error, Result,
    hasher::{HASH_SIZE, Hash, LEAF_PREFIX, MerkleHasher, NODE_PREFIX},
};

/// Width of a namespace: one version byte plus a 28-byte identifier.
pub const NAMESPACE_SIZE: usize = 29;

/// Serialized size of a [`NamespacedHash`]: `min || max || digest`.
pub const NAMESPACED_HASH_SIZE: usize = 2 * NAMESPACE_SIZE + HASH_SIZE;

/// Raw namespace bytes as seen by the tree.
pub type NamespaceId = [u8; NAMESPACE_SIZE];

/// A tree node: the digest plus the namespace range of every leaf under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamespacedHash {
    min_namespace: NamespaceId,
    max_namespace: NamespaceId,
    digest: Hash,
}

impl NamespacedHash {
    /// Assemble a node from its parts.
    pub fn new(min_namespace: NamespaceId, max_namespace: NamespaceId, digest: Hash) -> Self {
        NamespacedHash {
            min_namespace,
            max_namespace,
            digest,
        }
    }

    /// Hash a leaf whose namespace is `namespace`.
    ///
    /// `leaf_bytes` is hashed as given; callers that want the namespace inside
    /// the leaf must prefix it themselves.
    pub fn leaf<H: MerkleHasher>(namespace: &NamespaceId, leaf_bytes: &[u8]) -> CostContext<Self> {
        let parts: [&[u8]; 4] = [&[LEAF_PREFIX], namespace, namespace, leaf_bytes];
        let digest = H::hash_parts(&parts);
        NamespacedHash::new(*namespace, *namespace, digest)
            .wrap_with_cost(OperationCost::leaf_hash(1 + 2 * NAMESPACE_SIZE + leaf_bytes.len()))
    }

    /// Merge two sibling nodes into their parent.
    pub fn merge<H: MerkleHasher>(left: &Self, right: &Self) -> CostContext<Self> {
        let min_namespace = left.min_namespace.min(right.min_namespace);
        let max_namespace = left.max_namespace.max(right.max_namespace);
        let parts: [&[u8]; 5] = [
            &[NODE_PREFIX],
            &min_namespace,
            &max_namespace,
            &left.digest,
            &right.digest,
        ];
        let digest = H::hash_parts(&parts);
        NamespacedHash::new(min_namespace, max_namespace, digest)
            .wrap_with_cost(OperationCost::node_hash(1 + 2 * NAMESPACE_SIZE + 2 * HASH_SIZE))
    }

    /// Smallest namespace under this node.
    pub fn min_namespace(&self) -> &NamespaceId {
        &self.min_namespace
    }

    /// Largest namespace under this node.
    pub fn max_namespace(&self) -> &NamespaceId {
        &self.max_namespace
    }

    /// The 32-byte digest.
    pub fn digest(&self) -> Hash {
        self.digest
    }

    /// Serialize as `min || max || digest`.
    pub fn to_bytes(&self) -> [u8; NAMESPACED_HASH_SIZE] {
        let mut out = [0u8; NAMESPACED_HASH_SIZE];
        out[..NAMESPACE_SIZE].copy_from_slice(&self.min_namespace);
        out[NAMESPACE_SIZE..2 * NAMESPACE_SIZE].copy_from_slice(&self.max_namespace);
        out[2 * NAMESPACE_SIZE..].copy_from_slice(&self.digest);
        out
    }

    /// Deserialize from `min || max || digest`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != NAMESPACED_HASH_SIZE {
            return Err(Error::InvalidData(format!(
                "namespaced hash must be {} bytes, got {}",
                NAMESPACED_HASH_SIZE,
                data.len()
            )));
        }
        let (min, rest) = data.split_at(NAMESPACE_SIZE);
        let (max, digest) = rest.split_at(NAMESPACE_SIZE);
        let node = NamespacedHash::new(
            min.try_into()
                .map_err(|_| Error::InvalidData("bad min namespace".into()))?,
            max.try_into()
                .map_err(|_| Error::InvalidData("bad max namespace".into()))?,
            digest
                .try_into()
                .map_err(|_| Error::InvalidData("bad digest".into()))?,
        );
        if node.min_namespace > node.max_namespace {
            return Err(Error::InvalidData(
                "min namespace is greater than max namespace".into(),
            ));
        }
        Ok(node)
    }
}

impl fmt::Display for NamespacedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            hex::encode(self.min_namespace),
            hex::encode(self.max_namespace),
            hex::encode(self.digest)
        )
    }
}
