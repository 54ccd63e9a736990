//! Satoshi uploader payload convention
//!
//! The 2013 uploader tool (used for the WikiLeaks Cablegate archive among
//! others) split a file across many outputs after framing it as:
//!
//! ```text
//! [length: u32 LE][crc32: u32 LE][payload: length bytes][padding...]
//! ```
//!
//! The last output is zero-padded to fill its fake pubkey, so anything past
//! `length` is ignored.

use crate::errors::{EncodingError, ForensicsResult};
use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Size of the length + checksum prefix
pub const PREFIX_LEN: usize = 8;

/// What to do when the embedded checksum disagrees with the payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumPolicy {
    /// Reject the payload
    #[default]
    Verify,
    /// Return the payload anyway; several historic uploads carry bad checksums
    Ignore,
}

/// CRC-32 (IEEE) as used by the uploader
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = flate2::Crc::new();
    crc.update(data);
    crc.sum()
}

/// Decode with checksum verification
///
/// # Examples
/// ```
/// use tx_payload_forensics::decoder::{decode_embedded_payload, encode_embedded_payload};
///
/// let framed = encode_embedded_payload(b"hello").unwrap();
/// assert_eq!(decode_embedded_payload(&framed).unwrap(), b"hello");
/// ```
pub fn decode_embedded_payload(bytes: &[u8]) -> ForensicsResult<Vec<u8>> {
    decode_embedded_payload_with(bytes, ChecksumPolicy::Verify)
}

/// Decode under an explicit checksum policy
pub fn decode_embedded_payload_with(
    bytes: &[u8],
    policy: ChecksumPolicy,
) -> ForensicsResult<Vec<u8>> {
    if bytes.len() < PREFIX_LEN {
        return Err(EncodingError::TooShort {
            available: bytes.len(),
            required: PREFIX_LEN,
        }
        .into());
    }

    let declared = LittleEndian::read_u32(&bytes[0..4]) as usize;
    let expected = LittleEndian::read_u32(&bytes[4..PREFIX_LEN]);
    let body = &bytes[PREFIX_LEN..];

    if declared > body.len() {
        return Err(EncodingError::LengthExceedsData {
            declared,
            available: body.len(),
        }
        .into());
    }

    let payload = &body[..declared];
    let actual = crc32(payload);
    if actual != expected {
        match policy {
            ChecksumPolicy::Verify => {
                return Err(EncodingError::ChecksumMismatch { expected, actual }.into());
            }
            ChecksumPolicy::Ignore => {
                warn!(
                    "Embedded payload checksum mismatch ignored: expected {:#010x}, got {:#010x} ({} bytes)",
                    expected, actual, declared
                );
            }
        }
    }

    Ok(payload.to_vec())
}

/// Frame `payload` the way the uploader does
pub fn encode_embedded_payload(payload: &[u8]) -> ForensicsResult<Vec<u8>> {
    let len = u32::try_from(payload.len())
        .map_err(|_| EncodingError::PayloadTooLarge { len: payload.len() })?;

    let mut prefix = [0u8; PREFIX_LEN];
    LittleEndian::write_u32(&mut prefix[0..4], len);
    LittleEndian::write_u32(&mut prefix[4..PREFIX_LEN], crc32(payload));

    let mut framed = Vec::with_capacity(PREFIX_LEN + payload.len());
    framed.extend_from_slice(&prefix);
    framed.extend_from_slice(payload);
    Ok(framed)
}
