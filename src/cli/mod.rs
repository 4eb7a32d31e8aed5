//! CLI subcommand implementations for the sitescout binary.

pub mod output;
pub mod scan_cmd;
