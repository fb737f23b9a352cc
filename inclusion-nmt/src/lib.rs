//! Namespaced and plain Merkle trees for blob share commitments.
//!
//! Both trees share the same domain-separated hashing layout and the same
//! balanced shape: a set of `n` leaves is split at the largest power of two
//! strictly less than `n`, recursively.
//!
//! # Core types
//!
//! - [`MerkleHasher`] — the 256-bit hash capability ([`Sha256Hasher`] is the
//!   reference function, [`Blake3Hasher`] an alternative).
//! - [`NamespaceMerkleTree`] — namespace-aware tree producing a
//!   [`NamespacedHash`] root.
//! - [`RootCombinator`] / [`PlainMerkleRoot`] — the plain Merkle root used to
//!   fold subtree roots into a single commitment.

#![warn(missing_docs)]

mod error;
mod hasher;
/// Tree shape helpers.
pub(crate) mod helper;
mod node;
mod simple;
mod tree;

pub use error::{Error, Result};
pub use hasher::{
    Blake3Hasher, HASH_SIZE, Hash, LEAF_PREFIX, MerkleHasher, NODE_PREFIX, Sha256Hasher,
};
pub use helper::split_point;
pub use inclusion_costs::{CostResult, CostsExt, OperationCost};
pub use node::{NAMESPACE_SIZE, NAMESPACED_HASH_SIZE, NamespaceId, NamespacedHash};
pub use simple::{PlainMerkleRoot, RootCombinator, merkle_root};
pub use tree::NamespaceMerkleTree;
