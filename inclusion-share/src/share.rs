use std::fmt;

use crate::{
    Error, Namespace, Result,
    constants::{
        CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, NAMESPACE_SIZE, SEQUENCE_LEN_BYTES,
        SHARE_INFO_BYTES, SHARE_SIZE, SHARE_VERSION_ONE, SHARE_VERSION_ZERO, SIGNER_SIZE,
        first_sparse_share_content_size,
    },
    info_byte::InfoByte,
};

const INFO_BYTE_OFFSET: usize = NAMESPACE_SIZE;
const SEQUENCE_LEN_OFFSET: usize = INFO_BYTE_OFFSET + SHARE_INFO_BYTES;
const CONTINUATION_PAYLOAD_OFFSET: usize = SEQUENCE_LEN_OFFSET;
const SIGNER_OFFSET: usize = SEQUENCE_LEN_OFFSET + SEQUENCE_LEN_BYTES;

/// A 512-byte share.
///
/// Construction validates the namespace, the share version and the signer
/// layout, so accessors never fail except where the share variant does not
/// carry the requested field.
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    data: [u8; SHARE_SIZE],
}

/// Borrowed view of a decoded share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedShare<'a> {
    /// Namespace of the share.
    pub namespace: Namespace,
    /// Share version from the info byte.
    pub share_version: u8,
    /// Whether the share starts a sequence.
    pub is_sequence_start: bool,
    /// Total blob length, present on sequence-start shares only.
    pub sequence_len: Option<u32>,
    /// Signer, present on version-1 sequence-start shares only.
    pub signer: Option<&'a [u8]>,
    /// Payload region including any trailing zero padding.
    pub payload: &'a [u8],
}

/// Fail unless `signer` has the shape `share_version` requires.
pub(crate) fn validate_signer(share_version: u8, signer: Option<&[u8]>) -> Result<()> {
    match (share_version, signer) {
        (SHARE_VERSION_ZERO, None) => Ok(()),
        (SHARE_VERSION_ZERO, Some(_)) => Err(Error::InvalidSigner(
            "share version 0 does not carry a signer".into(),
        )),
        (SHARE_VERSION_ONE, Some(signer)) if signer.len() == SIGNER_SIZE => Ok(()),
        (SHARE_VERSION_ONE, Some(signer)) => Err(Error::InvalidSigner(format!(
            "signer must be {} bytes, got {}",
            SIGNER_SIZE,
            signer.len()
        ))),
        (SHARE_VERSION_ONE, None) => Err(Error::InvalidSigner(
            "share version 1 requires a signer".into(),
        )),
        (version, _) => Err(Error::UnsupportedShareVersion(version)),
    }
}

fn validate_share_version(share_version: u8) -> Result<()> {
    match share_version {
        SHARE_VERSION_ZERO | SHARE_VERSION_ONE => Ok(()),
        version => Err(Error::UnsupportedShareVersion(version)),
    }
}

fn payload_offset(info: InfoByte) -> usize {
    match (info.is_sequence_start(), info.version()) {
        (false, _) => CONTINUATION_PAYLOAD_OFFSET,
        (true, SHARE_VERSION_ONE) => SIGNER_OFFSET + SIGNER_SIZE,
        (true, _) => SIGNER_OFFSET,
    }
}

impl Share {
    /// Encode a sequence-start share without a signer.
    pub fn encode_sequence_start(
        namespace: Namespace,
        share_version: u8,
        sequence_len: u32,
        payload: &[u8],
    ) -> Result<Self> {
        Self::encode_sequence_start_signed(namespace, share_version, sequence_len, None, payload)
    }

    /// Encode a sequence-start share, with the signer required by share
    /// version 1.
    pub fn encode_sequence_start_signed(
        namespace: Namespace,
        share_version: u8,
        sequence_len: u32,
        signer: Option<&[u8]>,
        payload: &[u8],
    ) -> Result<Self> {
        validate_signer(share_version, signer)?;
        let info = InfoByte::new(share_version, true)?;
        let capacity = first_sparse_share_content_size(share_version);
        if payload.len() > capacity {
            return Err(Error::MalformedShare(format!(
                "sequence start payload of {} bytes exceeds capacity {}",
                payload.len(),
                capacity
            )));
        }
        Ok(Self::build(
            &namespace,
            info,
            Some(sequence_len),
            signer,
            payload,
        ))
    }

    /// Encode a continuation share.
    pub fn encode_continuation(
        namespace: Namespace,
        share_version: u8,
        payload: &[u8],
    ) -> Result<Self> {
        validate_share_version(share_version)?;
        let info = InfoByte::new(share_version, false)?;
        if payload.len() > CONTINUATION_SPARSE_SHARE_CONTENT_SIZE {
            return Err(Error::MalformedShare(format!(
                "continuation payload of {} bytes exceeds capacity {}",
                payload.len(),
                CONTINUATION_SPARSE_SHARE_CONTENT_SIZE
            )));
        }
        Ok(Self::build(&namespace, info, None, None, payload))
    }

    /// A zero-length sequence-start share used to pad `namespace` up to an
    /// alignment boundary.
    pub fn namespace_padding(namespace: Namespace) -> Self {
        Self::build(
            &namespace,
            InfoByte::from_byte(u8::from(true)),
            Some(0),
            None,
            &[],
        )
    }

    fn build(
        namespace: &Namespace,
        info: InfoByte,
        sequence_len: Option<u32>,
        signer: Option<&[u8]>,
        payload: &[u8],
    ) -> Self {
        let mut data = [0u8; SHARE_SIZE];
        data[..NAMESPACE_SIZE].copy_from_slice(namespace.as_bytes());
        data[INFO_BYTE_OFFSET] = info.as_u8();
        let mut offset = SEQUENCE_LEN_OFFSET;
        if let Some(len) = sequence_len {
            data[offset..offset + SEQUENCE_LEN_BYTES].copy_from_slice(&len.to_be_bytes());
            offset += SEQUENCE_LEN_BYTES;
        }
        if let Some(signer) = signer {
            data[offset..offset + SIGNER_SIZE].copy_from_slice(signer);
            offset += SIGNER_SIZE;
        }
        data[offset..offset + payload.len()].copy_from_slice(payload);
        Share { data }
    }

    /// Decode raw share bytes.
    ///
    /// Fails with [`Error::MalformedShare`] unless `bytes` is exactly
    /// [`SHARE_SIZE`] long.
    pub fn decode(bytes: &[u8]) -> Result<DecodedShare<'_>> {
        if bytes.len() != SHARE_SIZE {
            return Err(Error::MalformedShare(format!(
                "share must be {} bytes, got {}",
                SHARE_SIZE,
                bytes.len()
            )));
        }
        let namespace = Namespace::from_raw(&bytes[..NAMESPACE_SIZE])?;
        let info = InfoByte::from_byte(bytes[INFO_BYTE_OFFSET]);
        validate_share_version(info.version())?;

        let sequence_len = if info.is_sequence_start() {
            let mut len = [0u8; SEQUENCE_LEN_BYTES];
            len.copy_from_slice(&bytes[SEQUENCE_LEN_OFFSET..SIGNER_OFFSET]);
            Some(u32::from_be_bytes(len))
        } else {
            None
        };
        let signer = (info.is_sequence_start() && info.version() == SHARE_VERSION_ONE)
            .then(|| &bytes[SIGNER_OFFSET..SIGNER_OFFSET + SIGNER_SIZE]);

        Ok(DecodedShare {
            namespace,
            share_version: info.version(),
            is_sequence_start: info.is_sequence_start(),
            sequence_len,
            signer,
            payload: &bytes[payload_offset(info)..],
        })
    }

    /// Validate and copy raw share bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes)?;
        let mut data = [0u8; SHARE_SIZE];
        data.copy_from_slice(bytes);
        Ok(Share { data })
    }

    /// The share's namespace.
    pub fn namespace(&self) -> Namespace {
        let mut bytes = [0u8; NAMESPACE_SIZE];
        bytes.copy_from_slice(&self.data[..NAMESPACE_SIZE]);
        Namespace::from_array_unchecked(bytes)
    }

    /// The info byte.
    pub fn info(&self) -> InfoByte {
        InfoByte::from_byte(self.data[INFO_BYTE_OFFSET])
    }

    /// Whether the share starts a sequence.
    pub fn is_sequence_start(&self) -> bool {
        self.info().is_sequence_start()
    }

    /// The total blob length of a sequence-start share.
    ///
    /// Fails with [`Error::MalformedShare`] on a continuation share, which
    /// carries no length field.
    pub fn sequence_len(&self) -> Result<u32> {
        if !self.is_sequence_start() {
            return Err(Error::MalformedShare(
                "continuation share has no sequence length".into(),
            ));
        }
        let mut len = [0u8; SEQUENCE_LEN_BYTES];
        len.copy_from_slice(&self.data[SEQUENCE_LEN_OFFSET..SIGNER_OFFSET]);
        Ok(u32::from_be_bytes(len))
    }

    /// The signer of a version-1 sequence-start share.
    pub fn signer(&self) -> Option<&[u8]> {
        let info = self.info();
        (info.is_sequence_start() && info.version() == SHARE_VERSION_ONE)
            .then(|| &self.data[SIGNER_OFFSET..SIGNER_OFFSET + SIGNER_SIZE])
    }

    /// Payload region, including trailing zero padding.
    pub fn payload(&self) -> &[u8] {
        &self.data[payload_offset(self.info())..]
    }

    /// All 512 bytes.
    pub fn as_bytes(&self) -> &[u8; SHARE_SIZE] {
        &self.data
    }

    /// All 512 bytes as a vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        f.debug_struct("Share")
            .field("namespace", &self.namespace())
            .field("version", &info.version())
            .field("sequence_start", &info.is_sequence_start())
            .field("sequence_len", &self.sequence_len().ok())
            .finish()
    }
}
