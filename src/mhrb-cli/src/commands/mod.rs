//! Command handlers for the mhrb CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod process;
pub mod spec;
