//! Bitcoin Transaction Payload Forensics
//!
//! Read-only analysis over one decoded transaction at a time: recover data
//! embedded in scripts, decode uploader-framed payloads, derive addresses,
//! flag dust patterns and reconcile fees through an injected lookup.

pub mod analysis;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod extraction;
pub mod lookup;
pub mod rpc;
pub mod types;
pub mod utils;
