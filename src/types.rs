//! Transaction Payload Forensics - Type System
//!
//! - `location`: Archive/block position metadata (`BlockLocation`)
//! - `transaction`: The immutable transaction wrapper (`LedgerTransaction`)

mod location;
mod transaction;

pub use location::BlockLocation;
pub use transaction::LedgerTransaction;
