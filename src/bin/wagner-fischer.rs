//! wagner-fischer - Rank dictionary words by Levenshtein distance
//!
//! Command-line front end over the distance strategies and ranker.

use clap::Parser;
use colored::Colorize;
use std::process;

use wagner_fischer::cli::commands;
use wagner_fischer::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
