//! Per-transaction forensic summary

use crate::analysis::{
    all_output_addresses, dust_output_count, fee_breakdown, has_suspicious_outputs,
    max_value_output_index,
};
use crate::config::AnalysisConfig;
use crate::decoder::decode_embedded_payload_with;
use crate::errors::ForensicsResult;
use crate::extraction::{collect_output_payloads, concat_input_scripts};
use crate::lookup::TransactionLookup;
use crate::types::LedgerTransaction;
use crate::utils::currency::{format_sats_as_btc, format_signed_amount};
use crate::utils::time::timestamp_to_iso;
use serde::Serialize;

/// Everything the analysis layer can say about one transaction
///
/// Individual analyses that fail are reported in their `*_error` field rather
/// than failing the whole report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionReport {
    pub txid: String,
    pub archive_filename: String,
    pub block_hash: String,
    pub block_date: String,
    pub block_time: String,
    pub index_in_block: u64,
    pub input_count: usize,
    pub output_count: usize,
    pub max_value_output: Option<usize>,
    pub max_value_error: Option<String>,
    pub dust_outputs: usize,
    pub suspicious_outputs: bool,
    pub addresses: Option<Vec<Vec<String>>>,
    pub address_error: Option<String>,
    pub output_payload_bytes: usize,
    pub skipped_outputs: Vec<usize>,
    pub input_script_bytes: usize,
    pub embedded_payload_bytes: Option<usize>,
    pub payload_error: Option<String>,
    pub total_input_display: Option<String>,
    pub total_output_display: Option<String>,
    pub fee_sats: Option<i64>,
    pub fee_display: Option<String>,
    pub fee_error: Option<String>,
}

impl TransactionReport {
    /// Run every analysis over `tx`
    ///
    /// Fails only when `config` itself is invalid.
    pub fn build<L>(
        tx: &LedgerTransaction,
        lookup: &L,
        config: &AnalysisConfig,
    ) -> ForensicsResult<Self>
    where
        L: TransactionLookup + ?Sized,
    {
        let network = config.network()?;
        let heuristic = config.dust_heuristic();
        let location = tx.location();

        let payloads = collect_output_payloads(tx);
        let (embedded_payload_bytes, payload_error) =
            match decode_embedded_payload_with(&payloads.data, config.checksum_policy) {
                Ok(payload) => (Some(payload.len()), None),
                Err(e) => (None, Some(e.to_string())),
            };

        let (max_value_output, max_value_error) = match max_value_output_index(tx) {
            Ok(index) => (Some(index), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let (addresses, address_error) = match all_output_addresses(tx, network) {
            Ok(addresses) => (
                Some(
                    addresses
                        .iter()
                        .map(|output| output.iter().map(|a| a.to_string()).collect())
                        .collect(),
                ),
                None,
            ),
            Err(e) => (None, Some(e.to_string())),
        };

        let (breakdown, fee_error) = match fee_breakdown(tx, lookup) {
            Ok(breakdown) => (Some(breakdown), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Ok(Self {
            txid: tx.txid().to_string(),
            archive_filename: tx.archive_filename(),
            block_hash: location.block_hash.to_string(),
            block_date: timestamp_to_iso(location.block_timestamp),
            block_time: location.block_time_iso(),
            index_in_block: location.index_in_block,
            input_count: tx.inputs().len(),
            output_count: tx.outputs().len(),
            max_value_output,
            max_value_error,
            dust_outputs: dust_output_count(tx, &heuristic),
            suspicious_outputs: has_suspicious_outputs(tx, &heuristic),
            addresses,
            address_error,
            output_payload_bytes: payloads.data.len(),
            skipped_outputs: payloads.skipped,
            input_script_bytes: concat_input_scripts(tx).len(),
            embedded_payload_bytes,
            payload_error,
            total_input_display: breakdown
                .as_ref()
                .map(|b| format_sats_as_btc(b.total_input_value)),
            total_output_display: breakdown
                .as_ref()
                .map(|b| format_sats_as_btc(b.total_output_value)),
            fee_sats: breakdown.as_ref().map(|b| b.fee_sats),
            fee_display: breakdown.as_ref().map(|b| format_signed_amount(b.fee())),
            fee_error,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
