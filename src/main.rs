use anyhow::{Context, Result};
use cellevo_core::{init_logging, AppConfig};
use cellevo_lib::app::{App, Display, HeadlessDisplay, Limited, RunSummary, TuiDisplay};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for a reproducible run (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Cells per generation (overrides the config file)
    #[arg(long)]
    population: Option<usize>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write the final snapshot as JSON (headless mode)
    #[arg(long)]
    dump_snapshot: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::load(path).with_context(|| format!("invalid config {}", path.display()))
    } else {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The TUI owns the terminal, so only headless runs log to stdout.
    if matches!(args.mode, Mode::Headless) {
        init_logging();
    }

    let mut config = load_config(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    if let Some(population) = args.population {
        config.evolution.population_size = population;
    }
    let mut app = App::new(config)?;

    match args.mode {
        Mode::Headless => {
            if args.max_ticks.is_none() {
                tracing::warn!("No --max-ticks given; running until interrupted");
            }
            let mut display = HeadlessDisplay::new();
            let summary = run(&mut app, &mut display, args.max_ticks)?;
            println!(
                "Finished after {} ticks: generation {}, {} deaths, {} food eaten",
                summary.ticks, summary.generation, summary.deaths, summary.food_eaten
            );
            if let (Some(path), Some(snapshot)) = (args.dump_snapshot, display.last_snapshot()) {
                std::fs::write(&path, snapshot.to_json()?)
                    .with_context(|| format!("writing snapshot to {}", path.display()))?;
            }
        }
        Mode::Standard => {
            let mut display = TuiDisplay::new()?;
            let res = run(&mut app, &mut display, args.max_ticks);
            display.exit()?;

            match res {
                Ok(summary) => println!(
                    "Exited clean after {} ticks (generation {}).",
                    summary.ticks, summary.generation
                ),
                Err(e) => eprintln!("Application error: {e}"),
            }
        }
    }

    Ok(())
}

fn run<D: Display>(app: &mut App, display: &mut D, max_ticks: Option<u64>) -> Result<RunSummary> {
    match max_ticks {
        Some(max) => app.run(&mut Limited::new(display, max)),
        None => app.run(display),
    }
}
