//! Transaction-level payload aggregation
//!
//! Output aggregation is best-effort: an output whose script cannot be walked
//! is dropped and the fold continues. The fold result records which outputs
//! were skipped so callers can see what was lost.

use super::extract_non_script_data;
use crate::errors::ForensicsResult;
use crate::types::LedgerTransaction;
use tracing::debug;

/// Result of folding payload extraction over every output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPayloads {
    /// Concatenated payload bytes of every extractable output, in output order
    pub data: Vec<u8>,
    /// Indices of outputs that contributed to `data`
    pub extracted: Vec<usize>,
    /// Indices of outputs whose scripts could not be walked
    pub skipped: Vec<usize>,
}

/// Payload bytes embedded in a single output
pub fn output_payload(tx: &LedgerTransaction, index: usize) -> ForensicsResult<Vec<u8>> {
    extract_non_script_data(&tx.output(index)?.script_pubkey)
}

/// Collect successes, drop failures
pub fn collect_output_payloads(tx: &LedgerTransaction) -> OutputPayloads {
    tx.outputs()
        .iter()
        .enumerate()
        .fold(OutputPayloads::default(), |mut acc, (index, output)| {
            match extract_non_script_data(&output.script_pubkey) {
                Ok(bytes) => {
                    acc.data.extend_from_slice(&bytes);
                    acc.extracted.push(index);
                }
                Err(e) => {
                    debug!(
                        "Skipping output {} of {} during payload concatenation: {}",
                        index,
                        tx.txid(),
                        e
                    );
                    acc.skipped.push(index);
                }
            }
            acc
        })
}

/// Concatenated payload bytes of all outputs; never fails
pub fn concat_output_payloads(tx: &LedgerTransaction) -> Vec<u8> {
    collect_output_payloads(tx).data
}

/// Raw scriptSig bytes of every input, verbatim and in input order
///
/// No opcode stripping: some uploads hide data in the signature scripts
/// themselves, where the push framing is part of what must be recovered.
pub fn concat_input_scripts(tx: &LedgerTransaction) -> Vec<u8> {
    tx.inputs()
        .iter()
        .flat_map(|input| input.script_sig.as_bytes().iter().copied())
        .collect()
}
