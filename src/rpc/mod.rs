//! Bitcoin Core RPC lookup collaborator
//!
//! - **Client** - Blocking Bitcoin Core RPC client implementing `TransactionLookup`
//! - **Retry** - Exponential backoff helper
//!
//! The client uses the `corepc-client` crate's synchronous interface, so it
//! can be handed straight to fee computation. Wrap it in
//! `lookup::CachedLookup` to avoid refetching shared parents.

pub mod client;
pub mod retry;

// Re-export main types
pub use client::BitcoinRpcClient;
pub use retry::calculate_next_backoff;
