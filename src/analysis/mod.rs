//! Transaction analysis
//!
//! - **addresses** - spending addresses implied by output scripts
//! - **output_heuristics** - max-value output and dust/suspicious-output check
//! - **fee_analyser** - fee reconciliation through an injected lookup
//! - **report** - all of the above gathered into one serialisable summary

pub mod addresses;
pub mod fee_analyser;
pub mod output_heuristics;
pub mod report;

pub use addresses::{all_output_addresses, output_addresses, script_addresses};
pub use fee_analyser::{fee, fee_breakdown, FeeBreakdown};
pub use output_heuristics::{
    dust_output_count, has_suspicious_outputs, max_value_output_index, DustHeuristic,
    DEFAULT_DUST_VALUE_SATS, DEFAULT_NON_DUST_OUTPUTS,
};
pub use report::TransactionReport;
