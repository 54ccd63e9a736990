//! Fee reconciliation through previous-output lookup
//!
//! All accumulation happens in integer satoshis; the decimal BTC view is only
//! produced by `SignedAmount` at the edge.

use crate::errors::{ForensicsError, ForensicsResult};
use crate::lookup::TransactionLookup;
use crate::types::LedgerTransaction;
use bitcoin::SignedAmount;
use serde::Serialize;
use tracing::debug;

/// Input/output totals behind a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub total_input_value: u64,
    pub total_output_value: u64,
    /// Input total minus output total (negative only for inconsistent lookups)
    pub fee_sats: i64,
    pub vsize: usize,
    pub is_coinbase: bool,
}

impl FeeBreakdown {
    pub fn fee(&self) -> SignedAmount {
        SignedAmount::from_sat(self.fee_sats)
    }

    /// Fee rate in sat/vB, 0.0 for an empty transaction
    pub fn fee_rate(&self) -> f64 {
        if self.vsize == 0 {
            0.0
        } else {
            self.fee_sats as f64 / self.vsize as f64
        }
    }
}

/// Transaction fee (inputs minus outputs)
///
/// Fails with `PreviousTxUnresolvable` as soon as any input's previous
/// transaction cannot be fetched or lacks the referenced output.
///
/// A coinbase transaction reports a fee of zero without consulting the
/// lookup. Resolving its null outpoint would otherwise fail as unresolvable.
pub fn fee<L>(tx: &LedgerTransaction, lookup: &L) -> ForensicsResult<SignedAmount>
where
    L: TransactionLookup + ?Sized,
{
    fee_breakdown(tx, lookup).map(|breakdown| breakdown.fee())
}

/// Fee together with the totals it was derived from
///
/// Coinbase transactions spend no previous outputs; their fee is zero and the
/// lookup is never consulted.
pub fn fee_breakdown<L>(tx: &LedgerTransaction, lookup: &L) -> ForensicsResult<FeeBreakdown>
where
    L: TransactionLookup + ?Sized,
{
    let total_output_value = checked_total(
        tx.outputs().iter().map(|output| output.value.to_sat()),
        "output",
    )?;
    let vsize = tx.tx().vsize();

    if tx.is_coinbase() {
        return Ok(FeeBreakdown {
            total_input_value: 0,
            total_output_value,
            fee_sats: 0,
            vsize,
            is_coinbase: true,
        });
    }

    let mut input_values = Vec::with_capacity(tx.inputs().len());
    for (input_index, input) in tx.inputs().iter().enumerate() {
        let prevout = input.previous_output;
        let unresolvable = |reason: String| ForensicsError::PreviousTxUnresolvable {
            input_index,
            txid: prevout.txid,
            vout: prevout.vout,
            reason,
        };

        let prev_tx = lookup
            .get_transaction(&prevout.txid)
            .map_err(|e| unresolvable(e.to_string()))?;
        let prev_output = prev_tx.outputs().get(prevout.vout as usize).ok_or_else(|| {
            unresolvable(format!(
                "previous transaction has only {} outputs",
                prev_tx.outputs().len()
            ))
        })?;

        debug!(
            "Input {} of {} spends {} sats from {}",
            input_index,
            tx.txid(),
            prev_output.value.to_sat(),
            prevout
        );
        input_values.push(prev_output.value.to_sat());
    }
    let total_input_value = checked_total(input_values, "input")?;

    let fee_sats = i64::try_from(total_input_value as i128 - total_output_value as i128)
        .map_err(|_| {
            ForensicsError::MalformedTransaction(format!(
                "fee of {} does not fit a signed amount",
                tx.txid()
            ))
        })?;

    debug!(
        "Fee for {}: inputs={} sats, outputs={} sats, fee={} sats",
        tx.txid(),
        total_input_value,
        total_output_value,
        fee_sats
    );

    Ok(FeeBreakdown {
        total_input_value,
        total_output_value,
        fee_sats,
        vsize,
        is_coinbase: false,
    })
}

fn checked_total(values: impl IntoIterator<Item = u64>, side: &str) -> ForensicsResult<u64> {
    values
        .into_iter()
        .try_fold(0u64, |acc, value| acc.checked_add(value))
        .ok_or_else(|| ForensicsError::MalformedTransaction(format!("{} values overflow", side)))
}
