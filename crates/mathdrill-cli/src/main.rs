//! mathdrill CLI — the interactive drill binary.

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use mathdrill_core::engine::{DrillConfig, DrillEngine};
use mathdrill_core::generator::RandomEquationGenerator;
use mathdrill_core::model::Difficulty;
use mathdrill_core::traits::{ReaderSource, SystemClock};

mod console;

use console::ConsoleObserver;

#[derive(Parser)]
#[command(name = "mathdrill", version, about = "Timed mental-arithmetic drill")]
struct Cli {
    /// Difficulty 0-3; prompts interactively when omitted
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    difficulty: Option<u8>,

    /// Session length in seconds
    #[arg(long, default_value = "60")]
    time_limit: u64,

    /// Seed the equation generator for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathdrill_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = ReaderSource::new(stdin.lock());
    let mut observer = ConsoleObserver::new();

    let generator = match cli.seed {
        Some(seed) => {
            tracing::debug!(seed, "seeded generator");
            RandomEquationGenerator::seeded(seed)
        }
        None => RandomEquationGenerator::new(),
    };
    let config = DrillConfig {
        time_limit: Duration::from_secs(cli.time_limit),
    };
    let mut engine = DrillEngine::new(Box::new(generator), Arc::new(SystemClock), config);

    let difficulty = match cli.difficulty {
        Some(code) => Difficulty::try_from(i64::from(code))?,
        None => engine.select_difficulty(&mut input, &mut observer)?,
    };

    println!("Difficulty: {} ({}).", difficulty.name(), difficulty.code());
    println!("Time limit: {} seconds.", cli.time_limit);
    println!();

    let report = engine.run(difficulty, &mut input, &mut observer)?;

    println!("Time has expired.");
    println!();
    console::print_results(&report);

    Ok(())
}
