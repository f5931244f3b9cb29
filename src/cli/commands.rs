//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::dictionary::load_dictionary;
use crate::distance::{EditDistance, Strategy};
use crate::rank::{rank_with_limit, Candidate};

use super::args::{Cli, Commands, ConfigAction};
use super::paths::{config_file_path, PersistentConfig, Settings};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Query {
            term,
            dict,
            strategy,
            limit,
            show_distances,
        } => {
            let overrides = PersistentConfig {
                dict_path: dict,
                strategy,
                limit,
                show_distances: show_distances.then_some(true),
            };
            let settings = resolve_settings(config_path, &overrides)?;
            cmd_query(&term, &settings)
        }
        Commands::Distance {
            source,
            target,
            strategy,
        } => {
            let overrides = PersistentConfig {
                strategy,
                ..PersistentConfig::default()
            };
            let settings = resolve_settings(config_path, &overrides)?;
            cmd_distance(&source, &target, settings.strategy)
        }
        Commands::Compare {
            term,
            dict,
            limit,
            rounds,
        } => {
            let overrides = PersistentConfig {
                dict_path: dict,
                limit,
                ..PersistentConfig::default()
            };
            let settings = resolve_settings(config_path, &overrides)?;
            cmd_compare(&term, &settings, rounds)
        }
        Commands::Config { action } => cmd_config(config_path, action),
    }
}

/// Merge command-line overrides over the persistent config
fn resolve_settings(config_path: Option<&Path>, overrides: &PersistentConfig) -> Result<Settings> {
    let config = PersistentConfig::load_from(config_path)?;
    Ok(config.merge(overrides).resolve())
}

fn require_dictionary(settings: &Settings) -> Result<(PathBuf, Vec<String>)> {
    let Some(path) = settings.dict_path.clone() else {
        bail!(
            "No dictionary specified. Pass --dict <path> or run `wagner-fischer config set --dict <path>`"
        );
    };
    let words = load_dictionary(&path)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
    Ok((path, words))
}

/// Query command
fn cmd_query(term: &str, settings: &Settings) -> Result<()> {
    let (_, words) = require_dictionary(settings)?;

    let mut engine = settings.strategy.build();
    let results = rank_with_limit(term, &words, &mut engine, settings.limit);

    print_results(&results, settings.show_distances);
    Ok(())
}

fn print_results(results: &[Candidate], show_distances: bool) {
    if results.is_empty() {
        println!("{}", "No matches found".yellow());
        return;
    }

    for (i, candidate) in results.iter().enumerate() {
        if show_distances {
            println!(
                "   {}. {} (d={})",
                i + 1,
                candidate.term.green(),
                candidate.distance
            );
        } else {
            println!("   {}. {}", i + 1, candidate.term.green());
        }
    }
    println!();
    println!("{} match(es) found", results.len());
}

/// Distance command
fn cmd_distance(source: &str, target: &str, strategy: Strategy) -> Result<()> {
    let mut engine = strategy.build();
    let distance = engine.distance(source, target);
    println!(
        "{} -> {}: {} ({})",
        source.cyan(),
        target.cyan(),
        distance.to_string().green().bold(),
        strategy.to_string().dimmed()
    );
    Ok(())
}

/// Timing and output of one strategy in a comparison run
struct StrategyRun {
    strategy: Strategy,
    per_round: Duration,
    results: Vec<Candidate>,
    hit_rate: Option<f64>,
}

fn run_strategy(
    strategy: Strategy,
    term: &str,
    words: &[String],
    limit: usize,
    rounds: usize,
) -> StrategyRun {
    // One engine for all rounds, so cached strategies warm up like a long-lived session.
    let mut engine = strategy.build();
    let mut results = Vec::new();

    let start = Instant::now();
    for _ in 0..rounds {
        results = rank_with_limit(term, words, &mut engine, limit);
    }
    let per_round = start.elapsed() / rounds as u32;

    StrategyRun {
        strategy,
        per_round,
        results,
        hit_rate: engine.cache_stats().map(|stats| stats.hit_rate()),
    }
}

/// Compare command
fn cmd_compare(term: &str, settings: &Settings, rounds: usize) -> Result<()> {
    if rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    let (path, words) = require_dictionary(settings)?;

    println!(
        "{} '{}' against {} words from {} ({} round(s) each)",
        "Ranking".bold(),
        term.cyan(),
        words.len(),
        path.display().to_string().cyan(),
        rounds
    );
    println!();

    let runs: Vec<StrategyRun> = Strategy::ALL
        .into_iter()
        .map(|strategy| run_strategy(strategy, term, &words, settings.limit, rounds))
        .collect();

    let baseline = &runs[0];
    for run in &runs {
        let speedup = baseline.per_round.as_secs_f64() / run.per_round.as_secs_f64().max(f64::EPSILON);
        let cache = match run.hit_rate {
            Some(rate) => format!("cache hit rate {:.1}%", rate * 100.0),
            None => String::new(),
        };
        println!(
            "  {} {:>12}/round  {:>6.2}x  {}",
            format!("{:<16}", run.strategy.name()).green(),
            format!("{:.3?}", run.per_round),
            speedup,
            cache.dimmed()
        );
    }

    let disagreeing: Vec<String> = runs
        .iter()
        .filter(|run| run.results != baseline.results)
        .map(|run| run.strategy.to_string())
        .collect();
    if !disagreeing.is_empty() {
        bail!(
            "Strategies disagree with baseline: {}",
            disagreeing.join(", ")
        );
    }

    println!();
    println!("{}", "All strategies agree:".bold());
    print_results(&baseline.results, true);
    Ok(())
}

/// Config command
fn cmd_config(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let path = config_file_path(config_path)?;
            let config = PersistentConfig::load_from(config_path)?;
            let settings = config.resolve();

            println!("{}", "Configuration".bold().underline());
            println!();
            println!("  File:           {}", path.display().to_string().cyan());
            println!(
                "  Dictionary:     {}",
                settings
                    .dict_path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
                    .green()
            );
            println!("  Strategy:       {}", settings.strategy.to_string().green());
            println!("  Limit:          {}", settings.limit.to_string().green());
            println!(
                "  Show distances: {}",
                settings.show_distances.to_string().green()
            );
            Ok(())
        }
        ConfigAction::Set {
            dict,
            strategy,
            limit,
            show_distances,
        } => {
            let updates = PersistentConfig {
                dict_path: dict,
                strategy,
                limit,
                show_distances,
            };
            if updates == PersistentConfig::default() {
                bail!("Nothing to set. Pass at least one of --dict, --strategy, --limit, --show-distances");
            }

            let config = PersistentConfig::load_from(config_path)?.merge(&updates);
            let path = config.save_to(config_path)?;
            println!("{} {}", "Saved".green(), path.display());
            Ok(())
        }
        ConfigAction::Reset => {
            let path = PersistentConfig::default().save_to(config_path)?;
            println!("{} {}", "Reset".green(), path.display());
            Ok(())
        }
    }
}
