//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::distance::Strategy;

#[derive(Parser)]
#[command(name = "wagner-fischer")]
#[command(about = "Rank dictionary words by Levenshtein distance")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank dictionary words by distance to a query
    Query {
        /// Query term
        term: String,

        /// Dictionary file (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Distance strategy
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show distances next to each result
        #[arg(long)]
        show_distances: bool,
    },

    /// Compute the distance between two strings
    Distance {
        /// First string
        source: String,

        /// Second string
        target: String,

        /// Distance strategy
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },

    /// Rank one query with every strategy and compare timings
    Compare {
        /// Query term
        term: String,

        /// Dictionary file (one word per line)
        #[arg(short, long)]
        dict: Option<PathBuf>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of rankings per strategy
        #[arg(short, long, default_value = "5")]
        rounds: usize,
    },

    /// Show or update persistent settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path and its settings
    Show,

    /// Update one or more settings
    Set {
        /// Default dictionary path
        #[arg(long)]
        dict: Option<PathBuf>,

        /// Default distance strategy
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Default result limit
        #[arg(long)]
        limit: Option<usize>,

        /// Show distances by default
        #[arg(long)]
        show_distances: Option<bool>,
    },

    /// Restore the built-in defaults
    Reset,
}
