//! Driver loop: tick the population, hand snapshots to a display, stop on quit.

pub mod display;
pub mod terminal;

pub use display::{Display, HeadlessDisplay, Limited};
pub use terminal::TuiDisplay;

use anyhow::Result;
use cellevo_core::{AppConfig, Metrics, Population, PopulationSnapshot, TickReport};
use std::time::{Duration, Instant};

/// Totals reported when a run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub generation: u64,
    pub deaths: u64,
    pub food_eaten: u64,
    pub reproductions: u64,
}

pub struct App {
    pub population: Population,
    pub metrics: Metrics,
    frame_interval: Duration,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        tracing::info!(
            fingerprint = %config.fingerprint(),
            seed = ?config.world.seed,
            population_size = config.evolution.population_size,
            "Starting simulation"
        );
        let target_fps = config.target_fps;
        let population = Population::new(config)?;
        // Validated non-zero by `Population::new`.
        let frame_interval = Duration::from_nanos(1_000_000_000 / target_fps);
        Ok(Self {
            population,
            metrics: Metrics::new(),
            frame_interval,
        })
    }

    /// Time between frames at the configured target fps.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// One tick with metrics bookkeeping.
    pub fn step(&mut self) -> TickReport {
        let started = Instant::now();
        let report = self.population.tick();
        self.metrics
            .record_tick(&report, started.elapsed(), self.population.population());
        if report.deaths > 0 {
            tracing::debug!(
                tick = report.tick,
                deaths = report.deaths,
                remaining = self.population.population(),
                "Cells died"
            );
        }
        report
    }

    #[must_use]
    pub fn snapshot(&self) -> PopulationSnapshot {
        self.population.snapshot()
    }

    /// Polls, ticks and renders until the display asks to quit.
    pub fn run<D: Display>(&mut self, display: &mut D) -> Result<RunSummary> {
        loop {
            let frame_start = Instant::now();
            if display.poll_quit()? {
                break;
            }
            self.step();
            display.render(&self.snapshot())?;

            if display.paced() {
                let elapsed = frame_start.elapsed();
                if elapsed < self.frame_interval {
                    std::thread::sleep(self.frame_interval - elapsed);
                }
            }
        }

        let summary = self.summary();
        tracing::info!(
            ticks = summary.ticks,
            generation = summary.generation,
            deaths = summary.deaths,
            reproductions = summary.reproductions,
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "Simulation finished"
        );
        Ok(summary)
    }

    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.population.tick_count,
            generation: self.population.generation_index,
            deaths: self.metrics.deaths(),
            food_eaten: self.metrics.food_eaten(),
            reproductions: self.metrics.reproductions(),
        }
    }
}
