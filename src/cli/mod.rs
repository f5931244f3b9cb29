//! CLI interface for wagner-fischer
//!
//! Provides command-line utilities for ranking and comparing strategies.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction};
pub use paths::{config_dir, PersistentConfig, Settings};
