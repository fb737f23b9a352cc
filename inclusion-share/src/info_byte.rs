use crate::{Error, Result, constants::MAX_SHARE_VERSION};

/// Share info byte: the share version in the high 7 bits and the
/// sequence-start flag in the lowest bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoByte(u8);

impl InfoByte {
    /// Build an info byte; versions above 127 do not fit in 7 bits.
    pub fn new(share_version: u8, is_sequence_start: bool) -> Result<Self> {
        if share_version > MAX_SHARE_VERSION {
            return Err(Error::UnsupportedShareVersion(share_version));
        }
        Ok(InfoByte((share_version << 1) | u8::from(is_sequence_start)))
    }

    /// Interpret a raw byte. Every byte value is a well-formed info byte.
    pub fn from_byte(byte: u8) -> Self {
        InfoByte(byte)
    }

    /// The share version.
    pub fn version(&self) -> u8 {
        self.0 >> 1
    }

    /// Whether the share starts a sequence.
    pub fn is_sequence_start(&self) -> bool {
        self.0 & 1 == 1
    }

    /// The raw byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}
