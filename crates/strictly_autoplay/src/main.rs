//! Strictly Autoplay - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_autoplay::{AutoplayConfig, Cli, Command, GameReport, RunSummary, play_game, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AutoplayConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AutoplayConfig::default(),
    };
    let config = cli.command.apply(config);
    config.validate()?;

    match cli.command {
        Command::Run { json, .. } => run_batch(&config, json),
        Command::Play { seed, .. } => play_one(&config, seed),
    }
}

/// Plays the configured batch and prints the summary.
#[instrument(skip(config))]
fn run_batch(config: &AutoplayConfig, json: bool) -> Result<()> {
    let summary = run(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

/// Plays a single seeded game and prints its final board.
#[instrument(skip(config))]
fn play_one(config: &AutoplayConfig, seed: u64) -> Result<()> {
    let report = play_game(config, seed)?;
    info!(score = report.score(), "Game over");
    print_report(&report);
    println!("{}", report.board());
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!(
        "strategy {} | base seed {} | {} games",
        summary.strategy(),
        summary.base_seed(),
        summary.reports().len()
    );
    for report in summary.reports() {
        print_report(report);
    }
    println!(
        "best score {} | mean score {:.1} | best tile {} | finished {}/{}",
        summary.best_score(),
        summary.mean_score(),
        summary.best_tile(),
        summary.finished_count(),
        summary.reports().len()
    );
}

fn print_report(report: &GameReport) {
    let status = if *report.finished() { "over" } else { "abandoned" };
    println!(
        "seed {:>20} | score {:>7} | max tile {:>5} | moves {:>6} | {}",
        report.seed(),
        report.score(),
        report.max_tile(),
        report.moves(),
        status
    );
}
