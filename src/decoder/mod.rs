//! Embedded payload decoding
//!
//! Layered strictly on top of `extraction`: concatenate output payloads first,
//! then decode the framed record they carry.

mod satoshi_uploader;

pub use satoshi_uploader::{
    crc32, decode_embedded_payload, decode_embedded_payload_with, encode_embedded_payload,
    ChecksumPolicy, PREFIX_LEN,
};

use crate::errors::ForensicsResult;
use crate::extraction::concat_output_payloads;
use crate::types::LedgerTransaction;

/// Concatenate every output's payload and decode the framed record
pub fn concat_decoded_output_payload(
    tx: &LedgerTransaction,
    policy: ChecksumPolicy,
) -> ForensicsResult<Vec<u8>> {
    let data = concat_output_payloads(tx);
    decode_embedded_payload_with(&data, policy)
}
