//! Share commitments for namespaced blobs.
//!
//! A commitment binds a blob to the exact shares it occupies so that its
//! inclusion can later be proven against the square's row roots:
//!
//! 1. the blob is split into 512-byte shares ([`inclusion_share`]);
//! 2. the share run is cut into power-of-two subtrees no wider than needed
//!    to keep the root count under a threshold ([`subtree_width`],
//!    [`mountain_range_sizes`]);
//! 3. each subtree is hashed into a namespaced Merkle root
//!    ([`inclusion_nmt::NamespaceMerkleTree`]);
//! 4. the subtree digests are folded with a plain Merkle root.
//!
//! ```
//! use inclusion::{CommitmentConfig, create_commitment};
//! use inclusion_share::{Blob, Namespace};
//!
//! let namespace = Namespace::new_v0(&[0x01, 0x02, 0x03]).unwrap();
//! let blob = Blob::new(namespace, vec![0u8; 1024], 0, None).unwrap();
//! let commitment = create_commitment(&blob, &CommitmentConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(commitment.as_bytes().len(), 32);
//! ```

#![warn(missing_docs)]

mod commitment;
pub mod config;
mod error;
mod planner;
#[cfg(test)]
mod tests;

pub use commitment::{
    Commitment, commitment_from_shares, create_commitment, create_commitment_with,
    create_commitments, subtree_roots,
};
pub use config::{CommitmentConfig, DEFAULT_MAX_BLOB_SIZE, DEFAULT_SUBTREE_ROOT_THRESHOLD};
pub use error::{Error, Result};
pub use inclusion_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use inclusion_nmt::{Blake3Hasher, MerkleHasher, PlainMerkleRoot, RootCombinator, Sha256Hasher};
pub use planner::{SubtreePlan, mountain_range_sizes, subtree_width};

// Shares and tree leaves agree on the namespace encoding.
const _: () = assert!(inclusion_share::NAMESPACE_SIZE == inclusion_nmt::NAMESPACE_SIZE);
