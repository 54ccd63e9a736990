//! Common Test Utilities
//!
//! Shared transaction and script builders used across the unit and
//! integration suites.

#![allow(dead_code)]

/// Test fixture utilities
pub mod fixtures {
    use bitcoin::absolute::LockTime;
    use bitcoin::hashes::Hash;
    use bitcoin::transaction::Version;
    use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness};
    use tx_payload_forensics::types::{BlockLocation, LedgerTransaction};

    /// Compressed generator point G, a valid public key
    pub const KEY_G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    /// Mainnet P2PKH address of `KEY_G`
    pub const KEY_G_ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";

    /// Wrap raw bytes as a script
    pub fn script(bytes: &[u8]) -> ScriptBuf {
        ScriptBuf::from_bytes(bytes.to_vec())
    }

    /// Script consisting of a single data push of `data` (up to 255 bytes)
    pub fn push_script(data: &[u8]) -> ScriptBuf {
        ScriptBuf::from_bytes(push_bytes(data))
    }

    fn push_bytes(data: &[u8]) -> Vec<u8> {
        assert!(data.len() <= 255, "fixture pushes are limited to 255 bytes");
        let mut bytes = if data.len() < 0x4c {
            vec![data.len() as u8]
        } else {
            vec![0x4c, data.len() as u8]
        };
        bytes.extend_from_slice(data);
        bytes
    }

    /// A push that declares more bytes than the script holds
    pub fn malformed_script() -> ScriptBuf {
        script(&[0x05, 0x01])
    }

    /// Standard pay-to-pubkey-hash script
    pub fn p2pkh_script(hash: [u8; 20]) -> ScriptBuf {
        let mut bytes = vec![0x76, 0xa9, 0x14];
        bytes.extend_from_slice(&hash);
        bytes.extend_from_slice(&[0x88, 0xac]);
        ScriptBuf::from_bytes(bytes)
    }

    /// Bare multisig `OP_1 <key>... OP_n OP_CHECKMULTISIG` with arbitrary key bytes
    pub fn multisig_script(keys: &[Vec<u8>]) -> ScriptBuf {
        let mut bytes = vec![0x51];
        for key in keys {
            bytes.extend_from_slice(&push_bytes(key));
        }
        bytes.push(0x50 + keys.len() as u8);
        bytes.push(0xae);
        ScriptBuf::from_bytes(bytes)
    }

    pub fn output(value: u64, script_pubkey: ScriptBuf) -> TxOut {
        TxOut {
            value: Amount::from_sat(value),
            script_pubkey,
        }
    }

    /// Input spending `txid:vout` with the given scriptSig
    pub fn spend_with_script(txid: Txid, vout: u32, script_sig: ScriptBuf) -> TxIn {
        TxIn {
            previous_output: OutPoint { txid, vout },
            script_sig,
            sequence: Sequence::MAX,
            witness: Witness::new(),
        }
    }

    pub fn spend(txid: Txid, vout: u32) -> TxIn {
        spend_with_script(txid, vout, ScriptBuf::new())
    }

    /// Deterministic non-null txid for inputs whose parent is irrelevant
    pub fn dummy_txid(tag: u8) -> Txid {
        Txid::from_byte_array([tag; 32])
    }

    /// Transaction with version 1; `lock_time` keeps otherwise identical fixtures distinct
    pub fn raw_transaction(inputs: Vec<TxIn>, outputs: Vec<TxOut>, lock_time: u32) -> Transaction {
        Transaction {
            version: Version::ONE,
            lock_time: LockTime::from_consensus(lock_time),
            input: inputs,
            output: outputs,
        }
    }

    pub fn transaction(inputs: Vec<TxIn>, outputs: Vec<TxOut>) -> LedgerTransaction {
        LedgerTransaction::unplaced(raw_transaction(inputs, outputs, 0))
    }

    /// Non-coinbase transaction paying `values` to empty scripts
    pub fn transaction_with_values(values: &[u64]) -> LedgerTransaction {
        transaction(
            vec![spend(dummy_txid(1), 0)],
            values
                .iter()
                .map(|value| output(*value, ScriptBuf::new()))
                .collect(),
        )
    }

    /// Non-coinbase transaction whose outputs carry `scripts` (1000 sats each)
    pub fn transaction_with_scripts(scripts: Vec<ScriptBuf>) -> LedgerTransaction {
        transaction(
            vec![spend(dummy_txid(1), 0)],
            scripts
                .into_iter()
                .map(|script_pubkey| output(1000, script_pubkey))
                .collect(),
        )
    }

    /// Parent transaction with outputs of `values`; `tag` makes its txid unique
    pub fn funding_transaction(values: &[u64], tag: u32) -> LedgerTransaction {
        LedgerTransaction::unplaced(raw_transaction(
            vec![spend(dummy_txid(0xfe), tag)],
            values
                .iter()
                .map(|value| output(*value, p2pkh_script([tag as u8; 20])))
                .collect(),
            tag,
        ))
    }

    /// Coinbase transaction paying `value`
    pub fn coinbase_transaction(value: u64) -> LedgerTransaction {
        transaction(
            vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: script(&[0x03, 0x01, 0x02, 0x03]),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            vec![output(value, p2pkh_script([0x42; 20]))],
        )
    }

    /// Location as an archive walker would report it
    pub fn archive_location(archive_file_index: u16, index_in_block: u64) -> BlockLocation {
        BlockLocation {
            archive_file_index,
            block_timestamp: 1_365_000_000,
            block_index_in_archive: 17,
            index_in_block,
            ..BlockLocation::default()
        }
    }
}
