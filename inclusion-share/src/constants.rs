//! Share layout constants.

/// Size in bytes of every share.
pub const SHARE_SIZE: usize = 512;

/// Size of the namespace version prefix.
pub const NAMESPACE_VERSION_SIZE: usize = 1;

/// Size of the namespace identifier.
pub const NAMESPACE_ID_SIZE: usize = 28;

/// Total namespace width: version plus identifier.
pub const NAMESPACE_SIZE: usize = NAMESPACE_VERSION_SIZE + NAMESPACE_ID_SIZE;

/// Leading identifier bytes that must be zero in a version-0 namespace.
pub const NAMESPACE_VERSION_ZERO_PREFIX_SIZE: usize = 18;

/// Usable identifier bytes of a version-0 namespace.
pub const NAMESPACE_VERSION_ZERO_ID_SIZE: usize =
    NAMESPACE_ID_SIZE - NAMESPACE_VERSION_ZERO_PREFIX_SIZE;

/// Namespace version for user data.
pub const NAMESPACE_VERSION_ZERO: u8 = 0;

/// Namespace version reserved for parity and padding.
pub const NAMESPACE_VERSION_MAX: u8 = u8::MAX;

/// Size of the info byte.
pub const SHARE_INFO_BYTES: usize = 1;

/// Size of the big-endian blob length carried by a sequence-start share.
pub const SEQUENCE_LEN_BYTES: usize = 4;

/// Size of the signer carried by share version 1.
pub const SIGNER_SIZE: usize = 20;

/// Share version without a signer.
pub const SHARE_VERSION_ZERO: u8 = 0;

/// Share version whose first share carries a signer.
pub const SHARE_VERSION_ONE: u8 = 1;

/// Largest share version that fits in the 7 high bits of the info byte.
pub const MAX_SHARE_VERSION: u8 = 127;

/// Payload capacity of a version-0 sequence-start share.
pub const FIRST_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - SEQUENCE_LEN_BYTES;

/// Payload capacity of a continuation share.
pub const CONTINUATION_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES;

/// Payload capacity of a sequence-start share of the given version.
pub const fn first_sparse_share_content_size(share_version: u8) -> usize {
    if share_version == SHARE_VERSION_ONE {
        FIRST_SPARSE_SHARE_CONTENT_SIZE - SIGNER_SIZE
    } else {
        FIRST_SPARSE_SHARE_CONTENT_SIZE
    }
}
