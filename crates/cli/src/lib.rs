//! CLI for the GXP workstation bootstrap harness.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
