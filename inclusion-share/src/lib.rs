//! Blob encoding into fixed-size, namespace-tagged shares.
//!
//! A [`Blob`] is split into a run of 512-byte [`Share`]s: one sequence-start
//! share carrying the blob length, followed by as many continuation shares as
//! the payload needs. Splitting is sparse: every blob begins on a fresh share
//! and no share ever holds bytes from two blobs.
//!
//! ```text
//! sequence start: namespace(29) | info(1) | len(4, BE) | [signer(20)] | payload | 0-pad
//! continuation:   namespace(29) | info(1) | payload | 0-pad
//! ```

#![warn(missing_docs)]

mod blob;
pub mod constants;
mod error;
mod info_byte;
mod namespace;
mod parser;
mod share;
mod splitter;

pub use blob::Blob;
pub use constants::*;
pub use error::{Error, Result};
pub use info_byte::InfoByte;
pub use namespace::{
    MAX_PRIMARY_RESERVED_NAMESPACE, MIN_SECONDARY_RESERVED_NAMESPACE, Namespace,
    PARITY_SHARES_NAMESPACE, TAIL_PADDING_NAMESPACE,
};
pub use parser::parse_sparse_shares;
pub use share::{DecodedShare, Share};
pub use splitter::{SparseShareSplitter, split_blob, sparse_shares_needed};
