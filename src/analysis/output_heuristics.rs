//! Output value heuristics
//!
//! Covert-signal and dusting transactions typically send the minimum
//! representable amount to every output but one (the change or the real
//! payment). The thresholds are calibrated by eye, so they are carried in a
//! `DustHeuristic` rather than baked into the check.

use crate::errors::{ForensicsError, ForensicsResult};
use crate::types::LedgerTransaction;
use serde::{Deserialize, Serialize};

/// Value an output must carry to count as dust: one satoshi
pub const DEFAULT_DUST_VALUE_SATS: u64 = 1;

/// Outputs allowed to be non-dust in a suspicious transaction
pub const DEFAULT_NON_DUST_OUTPUTS: usize = 1;

/// Thresholds for `has_suspicious_outputs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DustHeuristic {
    /// Exact output value (sats) that marks an output as dust
    pub dust_value_sats: u64,
    /// Number of outputs that are expected to carry real value
    pub non_dust_outputs: usize,
}

impl Default for DustHeuristic {
    fn default() -> Self {
        Self {
            dust_value_sats: DEFAULT_DUST_VALUE_SATS,
            non_dust_outputs: DEFAULT_NON_DUST_OUTPUTS,
        }
    }
}

/// Index of the first output holding the strictly greatest value
///
/// An all-zero transaction yields 0. A transaction without outputs has no
/// such index and fails with `MalformedTransaction`.
pub fn max_value_output_index(tx: &LedgerTransaction) -> ForensicsResult<usize> {
    if tx.outputs().is_empty() {
        return Err(ForensicsError::MalformedTransaction(format!(
            "transaction {} has no outputs",
            tx.txid()
        )));
    }

    let mut max_value = 0u64;
    let mut max_index = 0usize;
    for (index, output) in tx.outputs().iter().enumerate() {
        let value = output.value.to_sat();
        if value > max_value {
            max_value = value;
            max_index = index;
        }
    }

    Ok(max_index)
}

/// Number of outputs whose value equals the dust value exactly
pub fn dust_output_count(tx: &LedgerTransaction, heuristic: &DustHeuristic) -> usize {
    tx.outputs()
        .iter()
        .filter(|output| output.value.to_sat() == heuristic.dust_value_sats)
        .count()
}

/// True iff there is dust and every output except `non_dust_outputs` is dust
pub fn has_suspicious_outputs(tx: &LedgerTransaction, heuristic: &DustHeuristic) -> bool {
    let dust = dust_output_count(tx, heuristic);
    dust > 0 && tx.outputs().len().checked_sub(heuristic.non_dust_outputs) == Some(dust)
}
