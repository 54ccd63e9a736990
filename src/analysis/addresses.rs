//! Spending address derivation from output scripts
//!
//! Templates recognised:
//! - P2PKH, P2SH and every witness program (P2WPKH, P2WSH, P2TR, future versions)
//! - P2PK, reported as the P2PKH address of the key
//! - Bare multisig, reported as the P2PKH address of every valid key
//! - OP_RETURN null data, which pays no one and yields no address
//!
//! Data-carrying multisig often stuffs payload bytes into the key slots; keys
//! that are not valid curve points are skipped, so such outputs can map to
//! fewer addresses than keys (or none).

use crate::errors::{ForensicsError, ForensicsResult};
use crate::types::LedgerTransaction;
use bitcoin::opcodes::all::{OP_CHECKMULTISIG, OP_PUSHNUM_1, OP_PUSHNUM_16};
use bitcoin::script::Instruction;
use bitcoin::{Address, Network, PublicKey, Script};

/// Addresses implied by output `index` under `network`
pub fn output_addresses(
    tx: &LedgerTransaction,
    index: usize,
    network: Network,
) -> ForensicsResult<Vec<Address>> {
    let output = tx.output(index)?;
    script_addresses(&output.script_pubkey, network).ok_or_else(|| {
        ForensicsError::UnrecognizedScriptPattern {
            index,
            script_hex: hex::encode(output.script_pubkey.as_bytes()),
        }
    })
}

/// Addresses of every output in order; aborts on the first unrecognised script
pub fn all_output_addresses(
    tx: &LedgerTransaction,
    network: Network,
) -> ForensicsResult<Vec<Vec<Address>>> {
    (0..tx.outputs().len())
        .map(|index| output_addresses(tx, index, network))
        .collect()
}

/// Addresses implied by a script, or `None` when no template matches
pub fn script_addresses(script: &Script, network: Network) -> Option<Vec<Address>> {
    if script.is_op_return() {
        return Some(Vec::new());
    }

    if let Ok(address) = Address::from_script(script, network) {
        return Some(vec![address]);
    }

    if script.is_p2pk() {
        return p2pk_addresses(script, network);
    }

    multisig_addresses(script, network)
}

fn pubkey_address(key: &[u8], network: Network) -> Option<Address> {
    PublicKey::from_slice(key)
        .ok()
        .map(|pk| Address::p2pkh(pk.pubkey_hash(), network))
}

fn p2pk_addresses(script: &Script, network: Network) -> Option<Vec<Address>> {
    match script.instructions().next()? {
        Ok(Instruction::PushBytes(key)) => {
            Some(pubkey_address(key.as_bytes(), network).into_iter().collect())
        }
        _ => None,
    }
}

/// Small integer carried by `OP_PUSHNUM_1`..`OP_PUSHNUM_16`
fn pushnum_value(instruction: &Instruction) -> Option<usize> {
    match instruction {
        Instruction::Op(op)
            if (OP_PUSHNUM_1.to_u8()..=OP_PUSHNUM_16.to_u8()).contains(&op.to_u8()) =>
        {
            Some((op.to_u8() - OP_PUSHNUM_1.to_u8() + 1) as usize)
        }
        _ => None,
    }
}

/// `OP_m <key>... OP_n OP_CHECKMULTISIG` with `m <= n` and exactly `n` keys
fn multisig_addresses(script: &Script, network: Network) -> Option<Vec<Address>> {
    let instructions = script
        .instructions()
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    let (first, rest) = instructions.split_first()?;
    let (last, rest) = rest.split_last()?;
    let (total_instruction, keys) = rest.split_last()?;

    if !matches!(last, Instruction::Op(op) if *op == OP_CHECKMULTISIG) {
        return None;
    }

    let required = pushnum_value(first)?;
    let total = pushnum_value(total_instruction)?;
    if required > total || keys.len() != total {
        return None;
    }

    let mut addresses = Vec::with_capacity(total);
    for key in keys {
        match key {
            Instruction::PushBytes(bytes) => {
                if let Some(address) = pubkey_address(bytes.as_bytes(), network) {
                    addresses.push(address);
                }
            }
            Instruction::Op(_) => return None,
        }
    }

    Some(addresses)
}
