use std::fmt;

use crate::{
    Error, Result,
    constants::{
        NAMESPACE_ID_SIZE, NAMESPACE_SIZE, NAMESPACE_VERSION_MAX, NAMESPACE_VERSION_ZERO,
        NAMESPACE_VERSION_ZERO_ID_SIZE, NAMESPACE_VERSION_ZERO_PREFIX_SIZE,
    },
};

/// Namespace identifier: one version byte followed by 28 identifier bytes.
///
/// Ordering is unsigned lexicographic over the 29 raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace([u8; NAMESPACE_SIZE]);

/// Upper bound of the primary reserved range (`0x00…00FF`). Version-0
/// namespaces at or below it cannot carry blobs.
pub const MAX_PRIMARY_RESERVED_NAMESPACE: Namespace =
    Namespace::with_last_byte(NAMESPACE_VERSION_ZERO, 0x00, 0xFF);

/// Lower bound of the secondary reserved range (`0xFF…FF00`).
pub const MIN_SECONDARY_RESERVED_NAMESPACE: Namespace =
    Namespace::with_last_byte(NAMESPACE_VERSION_MAX, 0xFF, 0x00);

/// Namespace of the shares that pad the tail of a square (`0xFF…FFFE`).
pub const TAIL_PADDING_NAMESPACE: Namespace =
    Namespace::with_last_byte(NAMESPACE_VERSION_MAX, 0xFF, 0xFE);

/// Namespace of erasure-coded parity shares (`0xFF…FFFF`).
pub const PARITY_SHARES_NAMESPACE: Namespace =
    Namespace::with_last_byte(NAMESPACE_VERSION_MAX, 0xFF, 0xFF);

impl Namespace {
    /// Construct a namespace from a version and a 28-byte identifier.
    ///
    /// Version-0 identifiers must start with 18 zero bytes.
    pub fn new(version: u8, id: &[u8]) -> Result<Self> {
        if id.len() != NAMESPACE_ID_SIZE {
            return Err(Error::InvalidNamespace(format!(
                "namespace id must be {} bytes, got {}",
                NAMESPACE_ID_SIZE,
                id.len()
            )));
        }
        if version == NAMESPACE_VERSION_ZERO
            && id[..NAMESPACE_VERSION_ZERO_PREFIX_SIZE].iter().any(|b| *b != 0)
        {
            return Err(Error::InvalidNamespace(format!(
                "version 0 namespace id must start with {} zero bytes, got {}",
                NAMESPACE_VERSION_ZERO_PREFIX_SIZE,
                hex::encode(id)
            )));
        }
        let mut bytes = [0u8; NAMESPACE_SIZE];
        bytes[0] = version;
        bytes[1..].copy_from_slice(id);
        Ok(Namespace(bytes))
    }

    /// Construct a version-0 namespace from up to 10 user bytes, left-padded
    /// with zeros.
    pub fn new_v0(sub_id: &[u8]) -> Result<Self> {
        if sub_id.len() > NAMESPACE_VERSION_ZERO_ID_SIZE {
            return Err(Error::InvalidNamespace(format!(
                "version 0 sub-id must be at most {} bytes, got {}",
                NAMESPACE_VERSION_ZERO_ID_SIZE,
                sub_id.len()
            )));
        }
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - sub_id.len()..].copy_from_slice(sub_id);
        Self::new(NAMESPACE_VERSION_ZERO, &id)
    }

    /// Parse 29 raw bytes (version followed by identifier).
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        match raw.split_first() {
            Some((version, id)) if raw.len() == NAMESPACE_SIZE => Self::new(*version, id),
            _ => Err(Error::InvalidNamespace(format!(
                "namespace must be {} bytes, got {}",
                NAMESPACE_SIZE,
                raw.len()
            ))),
        }
    }

    /// Wrap bytes that were validated when the enclosing share was decoded.
    pub(crate) fn from_array_unchecked(bytes: [u8; NAMESPACE_SIZE]) -> Self {
        Namespace(bytes)
    }

    /// Constant namespace whose identifier is `fill` everywhere but the last
    /// byte.
    const fn with_last_byte(version: u8, fill: u8, last: u8) -> Self {
        let mut bytes = [fill; NAMESPACE_SIZE];
        bytes[0] = version;
        bytes[NAMESPACE_SIZE - 1] = last;
        Namespace(bytes)
    }

    /// The version byte.
    pub fn version(&self) -> u8 {
        self.0[0]
    }

    /// The 28-byte identifier.
    pub fn id(&self) -> &[u8] {
        &self.0[1..]
    }

    /// All 29 bytes.
    pub fn as_bytes(&self) -> &[u8; NAMESPACE_SIZE] {
        &self.0
    }

    /// All 29 bytes, by value.
    pub fn to_bytes(self) -> [u8; NAMESPACE_SIZE] {
        self.0
    }

    /// Whether the namespace lies in the primary reserved range.
    pub fn is_primary_reserved(&self) -> bool {
        *self <= MAX_PRIMARY_RESERVED_NAMESPACE
    }

    /// Whether the namespace lies in the secondary reserved range.
    pub fn is_secondary_reserved(&self) -> bool {
        *self >= MIN_SECONDARY_RESERVED_NAMESPACE
    }

    /// Whether the namespace is reserved for protocol use.
    pub fn is_reserved(&self) -> bool {
        self.is_primary_reserved() || self.is_secondary_reserved()
    }

    /// Whether this is the parity shares namespace.
    pub fn is_parity_shares(&self) -> bool {
        *self == PARITY_SHARES_NAMESPACE
    }

    /// Whether this is the tail padding namespace.
    pub fn is_tail_padding(&self) -> bool {
        *self == TAIL_PADDING_NAMESPACE
    }

    /// Whether a user blob may be published under this namespace.
    pub fn is_usable_for_blob(&self) -> bool {
        self.version() == NAMESPACE_VERSION_ZERO && !self.is_reserved()
    }

    /// Fail with [`Error::InvalidNamespace`] unless
    /// [`is_usable_for_blob`](Self::is_usable_for_blob).
    pub fn validate_for_blob(&self) -> Result<()> {
        if self.version() != NAMESPACE_VERSION_ZERO {
            return Err(Error::InvalidNamespace(format!(
                "blob namespace must be version 0, got version {}",
                self.version()
            )));
        }
        if self.is_reserved() {
            return Err(Error::InvalidNamespace(format!(
                "namespace {} is reserved",
                self
            )));
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Namespace {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Namespace {
    type Error = Error;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self)
    }
}
