//! Serialisable per-transaction summary

use crate::common::fixtures::*;
use tx_payload_forensics::analysis::TransactionReport;
use tx_payload_forensics::config::AnalysisConfig;
use tx_payload_forensics::decoder::encode_embedded_payload;
use tx_payload_forensics::lookup::{CachedLookup, InMemoryLookup};
use tx_payload_forensics::types::LedgerTransaction;

fn reported_transaction() -> (InMemoryLookup, LedgerTransaction) {
    let parent = funding_transaction(&[100_000], 9);
    let framed = encode_embedded_payload(b"tagged").unwrap();

    let tx = LedgerTransaction::new(
        raw_transaction(
            vec![spend_with_script(parent.txid(), 0, script(&[0x01, 0xaa]))],
            vec![
                output(1, push_script(&framed)),
                output(1, malformed_script()),
                output(97_000, p2pkh_script([0x05; 20])),
            ],
            0,
        ),
        archive_location(5, 12),
    );

    (vec![parent].into_iter().collect(), tx)
}

#[test]
fn test_report_collects_every_analysis() -> anyhow::Result<()> {
    let (lookup, tx) = reported_transaction();
    let report = TransactionReport::build(&tx, &lookup, &AnalysisConfig::default())?;

    assert_eq!(report.txid, tx.txid().to_string());
    assert_eq!(report.archive_filename, "blk00005.dat");
    assert_eq!(report.block_date, "2013-04-03");
    assert_eq!(report.block_time, "2013-04-03T14:40:00Z");
    assert_eq!(report.index_in_block, 12);
    assert_eq!(report.output_count, 3);
    assert_eq!(report.max_value_output, Some(2));
    assert_eq!(report.max_value_error, None);
    assert_eq!(report.dust_outputs, 2);
    assert!(report.suspicious_outputs);
    assert_eq!(report.skipped_outputs, vec![1]);
    assert_eq!(report.embedded_payload_bytes, Some(6));
    assert_eq!(report.payload_error, None);
    assert_eq!(report.input_script_bytes, 2);
    assert_eq!(
        report.total_input_display.as_deref(),
        Some("0.00100000 BTC (100000 sats)")
    );
    assert_eq!(
        report.total_output_display.as_deref(),
        Some("0.00097002 BTC (97002 sats)")
    );
    assert_eq!(report.fee_sats, Some(2_998));
    assert_eq!(
        report.fee_display.as_deref(),
        Some("0.00002998 BTC (2998 sats)")
    );
    // The push-only data output matches no address template
    assert!(report.addresses.is_none());
    assert!(report.address_error.is_some());
    Ok(())
}

#[test]
fn test_report_keeps_going_when_lookup_fails() -> anyhow::Result<()> {
    let (_, tx) = reported_transaction();
    let report = TransactionReport::build(&tx, &InMemoryLookup::new(), &AnalysisConfig::default())?;

    assert_eq!(report.fee_sats, None);
    assert_eq!(report.total_input_display, None);
    assert!(report
        .fee_error
        .as_deref()
        .is_some_and(|e| e.contains("Previous transaction unresolvable")));
    assert_eq!(report.embedded_payload_bytes, Some(6));
    Ok(())
}

#[test]
fn test_report_records_payload_and_max_value_failures() -> anyhow::Result<()> {
    let parent = funding_transaction(&[100_000], 9);
    let lookup: InMemoryLookup = vec![parent.clone()].into_iter().collect();
    let tx = LedgerTransaction::new(
        raw_transaction(vec![spend(parent.txid(), 0)], vec![], 0),
        archive_location(5, 13),
    );

    let report = TransactionReport::build(&tx, &lookup, &AnalysisConfig::default())?;

    assert_eq!(report.embedded_payload_bytes, None);
    assert!(report
        .payload_error
        .as_deref()
        .is_some_and(|e| e.contains("0 bytes available, 8 required")));
    assert_eq!(report.max_value_output, None);
    assert!(report
        .max_value_error
        .as_deref()
        .is_some_and(|e| e.starts_with("Malformed transaction")));
    // The other analyses still run
    assert_eq!(report.fee_sats, Some(100_000));
    assert_eq!(report.addresses, Some(vec![]));
    Ok(())
}

#[test]
fn test_report_serialises_to_json() -> anyhow::Result<()> {
    let (lookup, tx) = reported_transaction();
    let cached = CachedLookup::new(lookup);
    let report = TransactionReport::build(&tx, &cached, &AnalysisConfig::default())?;

    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
    assert_eq!(json["archive_filename"], "blk00005.dat");
    assert_eq!(json["fee_sats"], 2_998);
    assert_eq!(json["skipped_outputs"][0], 1);
    assert_eq!(cached.stats().misses, 1);
    Ok(())
}

#[test]
fn test_report_rejects_invalid_network() {
    let (lookup, tx) = reported_transaction();
    let config = AnalysisConfig {
        network: "nowhere".to_string(),
        ..AnalysisConfig::default()
    };
    assert!(TransactionReport::build(&tx, &lookup, &config).is_err());
}
