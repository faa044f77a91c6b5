// src/commands/mod.rs
//! Command handlers for the mesonport CLI

mod build_log;
mod completions;
mod config;
mod exports;
mod options;
mod sources;
mod testdata;

// Re-export all command handlers
pub use build_log::cmd_build_options;
pub use completions::cmd_completions;
pub use config::{cmd_config_asm, cmd_config_mk};
pub use exports::cmd_exports;
pub use options::{cmd_options, cmd_toggles};
pub use sources::cmd_sources;
pub use testdata::cmd_check_test_data;
