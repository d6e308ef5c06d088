//! Run metrics and logging setup.

use crate::population::TickReport;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Ticks between summary log lines.
pub const SUMMARY_INTERVAL: u64 = 1000;

/// Counters accumulated over a run.
pub struct Metrics {
    tick_count: AtomicU64,
    deaths: AtomicU64,
    food_eaten: AtomicU64,
    food_spawned: AtomicU64,
    reproductions: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            deaths: AtomicU64::new(0),
            food_eaten: AtomicU64::new(0),
            food_spawned: AtomicU64::new(0),
            reproductions: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Accumulates one tick's report.
    pub fn record_tick(&self, report: &TickReport, duration: Duration, population: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.deaths
            .fetch_add(report.deaths as u64, Ordering::Relaxed);
        self.food_eaten
            .fetch_add(report.food_consumed as u64, Ordering::Relaxed);
        if report.food_spawned {
            self.food_spawned.fetch_add(1, Ordering::Relaxed);
        }
        if report.reproduction.is_some() {
            self.reproductions.fetch_add(1, Ordering::Relaxed);
        }

        if tick % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                tick = tick,
                population = population,
                deaths = self.deaths(),
                food_eaten = self.food_eaten(),
                reproductions = self.reproductions(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_eaten(&self) -> u64 {
        self.food_eaten.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_spawned(&self) -> u64 {
        self.food_spawned.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn reproductions(&self) -> u64 {
        self.reproductions.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::{Reproduction, ReproductionKind};

    fn report(deaths: usize, food_consumed: usize, reproduced: bool) -> TickReport {
        TickReport {
            tick: 1,
            deaths,
            food_consumed,
            food_spawned: true,
            reproduction: reproduced.then(|| Reproduction {
                generation: 1,
                population: 3,
                kind: ReproductionKind::Seeded,
            }),
        }
    }

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.deaths(), 0);
    }

    #[test]
    fn test_record_tick_accumulates() {
        let metrics = Metrics::new();
        metrics.record_tick(&report(2, 1, false), Duration::from_millis(1), 8);
        metrics.record_tick(&report(1, 0, true), Duration::from_millis(1), 3);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.deaths(), 3);
        assert_eq!(metrics.food_eaten(), 1);
        assert_eq!(metrics.food_spawned(), 2);
        assert_eq!(metrics.reproductions(), 1);
    }
}
