//! Transaction wrapper carrying the decoded transaction and its archive position

use crate::errors::{ForensicsError, ForensicsResult};
use crate::types::BlockLocation;
use bitcoin::{Transaction, TxIn, TxOut, Txid};

/// A decoded transaction plus where it was found
///
/// Immutable once constructed. Every extraction and analysis function in this
/// crate reads it through shared references, so it can be handed to several
/// threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerTransaction {
    tx: Transaction,
    txid: Txid,
    location: BlockLocation,
}

impl LedgerTransaction {
    pub fn new(tx: Transaction, location: BlockLocation) -> Self {
        let txid = tx.compute_txid();
        Self { tx, txid, location }
    }

    /// Wrap a transaction that did not come from an archive walk
    pub fn unplaced(tx: Transaction) -> Self {
        Self::new(tx, BlockLocation::default())
    }

    pub fn tx(&self) -> &Transaction {
        &self.tx
    }

    pub fn txid(&self) -> Txid {
        self.txid
    }

    pub fn location(&self) -> &BlockLocation {
        &self.location
    }

    pub fn inputs(&self) -> &[TxIn] {
        &self.tx.input
    }

    pub fn outputs(&self) -> &[TxOut] {
        &self.tx.output
    }

    /// Output at `index`, or `OutputIndexOutOfRange`
    pub fn output(&self, index: usize) -> ForensicsResult<&TxOut> {
        self.tx
            .output
            .get(index)
            .ok_or(ForensicsError::OutputIndexOutOfRange {
                index,
                len: self.tx.output.len(),
            })
    }

    pub fn is_coinbase(&self) -> bool {
        self.tx.is_coinbase()
    }

    /// Archive filename of the containing segment (diagnostics only)
    pub fn archive_filename(&self) -> String {
        self.location.archive_filename()
    }

    pub fn into_inner(self) -> Transaction {
        self.tx
    }
}

impl From<Transaction> for LedgerTransaction {
    fn from(tx: Transaction) -> Self {
        Self::unplaced(tx)
    }
}
