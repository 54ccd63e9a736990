//! Script payload extraction
//!
//! - `script_data`: literal push recovery from one script
//! - `payloads`: aggregation across a transaction's outputs and inputs

mod payloads;
mod script_data;

pub use payloads::{
    collect_output_payloads, concat_input_scripts, concat_output_payloads, output_payload,
    OutputPayloads,
};
pub use script_data::extract_non_script_data;
