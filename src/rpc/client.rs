use crate::config::BitcoinRpcConfig;
use crate::errors::{LookupResult, RpcError, RpcResult};
use crate::lookup::TransactionLookup;
use crate::rpc::calculate_next_backoff;
use crate::types::LedgerTransaction;
use bitcoin::{Transaction, Txid};
use corepc_client::client_sync::{v28::Client, Auth};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Blocking Bitcoin Core RPC client with retry logic
///
/// Transactions fetched over RPC carry no archive position, so they are
/// returned with a default `BlockLocation`.
pub struct BitcoinRpcClient {
    client: Client,
    config: BitcoinRpcConfig,
}

impl BitcoinRpcClient {
    /// Create a client and verify the node answers
    pub fn new(config: BitcoinRpcConfig) -> RpcResult<Self> {
        let auth = Auth::UserPass(config.username.clone(), config.password.clone());
        let client = Client::new_with_auth(&config.url, auth).map_err(|e| {
            RpcError::ConnectionFailed(format!("Failed to create Bitcoin RPC client: {}", e))
        })?;

        client.get_blockchain_info().map_err(|e| {
            RpcError::ConnectionFailed(format!(
                "Failed to connect to Bitcoin RPC - check URL, credentials, and that Bitcoin Core is running: {}",
                e
            ))
        })?;

        info!("Bitcoin RPC connection established successfully");

        Ok(Self { client, config })
    }

    /// Fetch and decode a transaction, retrying transient failures
    ///
    /// "Not found" responses are returned immediately without retrying.
    pub fn fetch_transaction(&self, txid: &Txid) -> RpcResult<Transaction> {
        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            let error = match self.client.get_raw_transaction(*txid) {
                Ok(raw) => {
                    if attempts > 0 {
                        debug!(
                            "Successfully retrieved transaction {} after {} attempts",
                            txid,
                            attempts + 1
                        );
                    }
                    return decode_raw_transaction(&raw.0);
                }
                Err(e) => e,
            };

            attempts += 1;

            if is_not_found(&error.to_string()) {
                debug!(
                    "Transaction {} not found (non-retryable error): {}",
                    txid, error
                );
                return Err(RpcError::TransactionNotFound { txid: *txid });
            }

            if attempts >= self.config.max_retries {
                error!(
                    "Failed to get transaction {} after {} attempts: {}",
                    txid, attempts, error
                );
                return Err(RpcError::MaxRetriesExceeded {
                    operation: format!("get_transaction({})", txid),
                });
            }

            warn!(
                "RPC attempt {} failed for transaction {}, retrying in {:?}: {}",
                attempts, txid, backoff, error
            );
            thread::sleep(backoff);

            backoff = calculate_next_backoff(
                backoff,
                self.config.backoff_multiplier,
                self.config.max_backoff_seconds,
            );
        }
    }
}

impl TransactionLookup for BitcoinRpcClient {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        let tx = self.fetch_transaction(txid)?;
        Ok(LedgerTransaction::unplaced(tx))
    }
}

/// Bitcoin Core's messages for unknown transactions
fn is_not_found(message: &str) -> bool {
    message.contains("No such mempool or blockchain transaction")
        || message.contains("Invalid or non-wallet transaction id")
}

fn decode_raw_transaction(raw_hex: &str) -> RpcResult<Transaction> {
    let tx_bytes = hex::decode(raw_hex).map_err(|e| {
        RpcError::DeserialisationFailed(format!("Failed to decode raw transaction hex: {}", e))
    })?;

    bitcoin::consensus::deserialize(&tx_bytes).map_err(|e| {
        RpcError::DeserialisationFailed(format!("Failed to deserialise raw transaction: {}", e))
    })
}
