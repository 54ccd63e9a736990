//! Address derivation per output and across outputs

use crate::common::fixtures::*;
use bitcoin::Network;
use tx_payload_forensics::analysis::{all_output_addresses, output_addresses};
use tx_payload_forensics::errors::ForensicsError;

fn custom_script() -> bitcoin::ScriptBuf {
    // OP_ADD OP_5 OP_EQUAL
    script(&[0x93, 0x55, 0x87])
}

#[test]
fn test_all_output_addresses_fails_fast_on_custom_script() {
    let tx = transaction_with_scripts(vec![p2pkh_script([0x11; 20]), custom_script()]);

    match all_output_addresses(&tx, Network::Bitcoin) {
        Err(ForensicsError::UnrecognizedScriptPattern { index, script_hex }) => {
            assert_eq!(index, 1);
            assert_eq!(script_hex, "935587");
        }
        other => panic!("expected UnrecognizedScriptPattern, got {:?}", other),
    }

    let addresses = output_addresses(&tx, 0, Network::Bitcoin).unwrap();
    assert_eq!(addresses.len(), 1);
}

#[test]
fn test_all_output_addresses_preserves_order() {
    let key = hex::decode(KEY_G).unwrap();
    let tx = transaction_with_scripts(vec![
        script(&[0x6a, 0x01, 0x00]),
        multisig_script(&[key.clone(), vec![0x00; 33]]),
        p2pkh_script([0u8; 20]),
    ]);

    let addresses = all_output_addresses(&tx, Network::Bitcoin).unwrap();
    assert_eq!(addresses.len(), 3);
    assert!(addresses[0].is_empty());
    assert_eq!(addresses[1].len(), 1);
    assert_eq!(addresses[1][0].to_string(), KEY_G_ADDRESS);
    assert_eq!(addresses[2][0].to_string(), "1111111111111111111114oLvT2");
}

#[test]
fn test_output_index_out_of_range() {
    let tx = transaction_with_scripts(vec![p2pkh_script([0x11; 20])]);
    assert!(matches!(
        output_addresses(&tx, 5, Network::Bitcoin),
        Err(ForensicsError::OutputIndexOutOfRange { index: 5, len: 1 })
    ));
}

#[test]
fn test_segwit_outputs() {
    // OP_0 <20 bytes>, OP_1 <32 bytes>
    let mut p2wpkh = vec![0x00, 0x14];
    p2wpkh.extend_from_slice(&[0x22; 20]);
    let mut p2tr = vec![0x51, 0x20];
    p2tr.extend_from_slice(&[0x33; 32]);
    let tx = transaction_with_scripts(vec![script(&p2wpkh), script(&p2tr)]);

    let addresses = all_output_addresses(&tx, Network::Bitcoin).unwrap();
    assert!(addresses[0][0].to_string().starts_with("bc1q"));
    assert!(addresses[1][0].to_string().starts_with("bc1p"));

    let regtest = output_addresses(&tx, 0, Network::Regtest).unwrap();
    assert!(regtest[0].to_string().starts_with("bcrt1q"));
}
