//! Literal data recovery from a single script
//!
//! A script is a stream of opcodes interleaved with data pushes. Data carriers
//! hide their bytes in the pushes (fake pubkeys, OP_RETURN payloads, padding in
//! scriptSigs), so dropping every opcode and keeping every push yields the
//! embedded payload.

use crate::errors::{ForensicsError, ForensicsResult};
use bitcoin::script::{Instruction, Script};

/// Concatenate every data push in `script`, discarding all opcodes
///
/// `OP_0` is an empty push and contributes nothing; `OP_PUSHNUM_n` and
/// `OP_1NEGATE` are opcodes, not data. A push whose declared length runs past
/// the end of the script fails with `MalformedScript`.
///
/// # Examples
/// ```
/// use bitcoin::ScriptBuf;
/// use tx_payload_forensics::extraction::extract_non_script_data;
///
/// // OP_RETURN <"hi">
/// let script = ScriptBuf::from_bytes(vec![0x6a, 0x02, b'h', b'i']);
/// assert_eq!(extract_non_script_data(&script).unwrap(), b"hi");
/// ```
pub fn extract_non_script_data(script: &Script) -> ForensicsResult<Vec<u8>> {
    let mut data = Vec::with_capacity(script.len());

    for instruction in script.instructions() {
        match instruction.map_err(|e| ForensicsError::MalformedScript {
            reason: e.to_string(),
        })? {
            Instruction::PushBytes(bytes) => data.extend_from_slice(bytes.as_bytes()),
            Instruction::Op(_) => {}
        }
    }

    Ok(data)
}
