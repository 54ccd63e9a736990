//! Transaction lookup capability
//!
//! Fee computation needs the outputs that a transaction's inputs spend. This
//! crate never fetches or stores transactions itself; callers pass in a
//! `TransactionLookup` instead.
//!
//! - **memory** - `InMemoryLookup`, a fixed set of transactions
//! - **cache** - `CachedLookup`, a memoising decorator around any lookup
//!
//! The Bitcoin Core backed implementation lives in `crate::rpc`.

pub mod cache;
pub mod memory;

pub use cache::{CacheStats, CachedLookup};
pub use memory::InMemoryLookup;

use crate::errors::LookupResult;
use crate::types::LedgerTransaction;
use bitcoin::Txid;
use std::sync::Arc;

/// Resolves a transaction by its id
///
/// Implementations that are shared across threads must also be `Sync`. Retry
/// and timeout policy belong to the implementation.
pub trait TransactionLookup {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction>;
}

impl<T: TransactionLookup + ?Sized> TransactionLookup for &T {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        (**self).get_transaction(txid)
    }
}

impl<T: TransactionLookup + ?Sized> TransactionLookup for Box<T> {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        (**self).get_transaction(txid)
    }
}

impl<T: TransactionLookup + ?Sized> TransactionLookup for Arc<T> {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        (**self).get_transaction(txid)
    }
}
