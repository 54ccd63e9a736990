use crate::errors::{LookupError, LookupResult};
use crate::lookup::TransactionLookup;
use crate::types::LedgerTransaction;
use bitcoin::Txid;
use std::collections::HashMap;

/// Lookup over a fixed set of transactions keyed by txid
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    transactions: HashMap<Txid, LedgerTransaction>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a transaction under its own txid, replacing any previous entry
    pub fn insert(&mut self, tx: LedgerTransaction) {
        self.transactions.insert(tx.txid(), tx);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl FromIterator<LedgerTransaction> for InMemoryLookup {
    fn from_iter<I: IntoIterator<Item = LedgerTransaction>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for tx in iter {
            lookup.insert(tx);
        }
        lookup
    }
}

impl TransactionLookup for InMemoryLookup {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        self.transactions
            .get(txid)
            .cloned()
            .ok_or(LookupError::NotFound { txid: *txid })
    }
}
