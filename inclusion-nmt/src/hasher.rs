//! Hash capability used by every tree in this crate.
//!
//! Domain separation:
//! - Leaf inputs:     `H(0x00 || ...)`
//! - Internal inputs: `H(0x01 || ...)`

use sha2::{Digest, Sha256};

/// Width in bytes of every digest produced by a [`MerkleHasher`].
pub const HASH_SIZE: usize = 32;

/// A 256-bit digest.
pub type Hash = [u8; HASH_SIZE];

/// Domain tag prepended to leaf hash inputs.
pub const LEAF_PREFIX: u8 = 0x00;
/// Domain tag prepended to internal merge inputs.
pub const NODE_PREFIX: u8 = 0x01;

/// A deterministic 256-bit hash function.
///
/// Implementations hash the concatenation of `parts` without any framing, so
/// `hash_parts(&[a, b])` equals `hash_parts(&[&[a, b].concat()])`.
pub trait MerkleHasher: Send + Sync + 'static {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Hash the concatenation of `parts`.
    fn hash_parts(parts: &[&[u8]]) -> Hash;

    /// Hash a single byte string.
    fn hash(data: &[u8]) -> Hash {
        Self::hash_parts(&[data])
    }
}

/// SHA-256, the reference hash for share commitments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    const NAME: &'static str = "sha256";

    fn hash_parts(parts: &[&[u8]]) -> Hash {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().into()
    }
}

/// Blake3 in its default 256-bit output mode.
///
/// Not interoperable with reference commitments; useful for local-only trees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    const NAME: &'static str = "blake3";

    fn hash_parts(parts: &[&[u8]]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(part);
        }
        *hasher.finalize().as_bytes()
    }
}
