use anyhow::Result;
use cellevo_core::PopulationSnapshot;

/// The boundary between the simulation and whatever shows it.
///
/// The driver calls `poll_quit` then `render` once per tick, on one thread.
pub trait Display {
    fn render(&mut self, snapshot: &PopulationSnapshot) -> Result<()>;

    /// `true` stops the run before the next tick.
    fn poll_quit(&mut self) -> Result<bool>;

    /// Whether the driver should sleep to hold the target fps.
    fn paced(&self) -> bool {
        true
    }
}

/// Display without output. Logs progress; never asks to quit on its own.
pub struct HeadlessDisplay {
    log_interval: u64,
    last: Option<PopulationSnapshot>,
    last_generation: u64,
}

impl Default for HeadlessDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self {
            log_interval: 100,
            last: None,
            last_generation: 0,
        }
    }

    #[must_use]
    pub fn with_log_interval(mut self, ticks: u64) -> Self {
        self.log_interval = ticks.max(1);
        self
    }

    /// Most recent snapshot, kept for dumping at the end of a run.
    pub fn last_snapshot(&self) -> Option<&PopulationSnapshot> {
        self.last.as_ref()
    }
}

impl Display for HeadlessDisplay {
    fn render(&mut self, snapshot: &PopulationSnapshot) -> Result<()> {
        if snapshot.generation != self.last_generation {
            tracing::info!(
                tick = snapshot.tick,
                generation = snapshot.generation,
                population = snapshot.cells.len(),
                "New generation"
            );
            self.last_generation = snapshot.generation;
        }
        if snapshot.tick % self.log_interval == 0 {
            let stats = &snapshot.stats;
            tracing::info!(
                tick = stats.tick,
                generation = stats.generation,
                population = stats.population,
                food = stats.food,
                mean_health = stats.mean_health,
                mean_energy = stats.mean_energy,
                "Progress"
            );
        }
        self.last = Some(snapshot.clone());
        Ok(())
    }

    fn poll_quit(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn paced(&self) -> bool {
        false
    }
}

/// Wraps a display and requests quit once `max_ticks` snapshots were rendered.
pub struct Limited<'a, D: Display> {
    inner: &'a mut D,
    max_ticks: u64,
    rendered: u64,
}

impl<'a, D: Display> Limited<'a, D> {
    pub fn new(inner: &'a mut D, max_ticks: u64) -> Self {
        Self {
            inner,
            max_ticks,
            rendered: 0,
        }
    }
}

impl<D: Display> Display for Limited<'_, D> {
    fn render(&mut self, snapshot: &PopulationSnapshot) -> Result<()> {
        self.rendered += 1;
        self.inner.render(snapshot)
    }

    fn poll_quit(&mut self) -> Result<bool> {
        if self.rendered >= self.max_ticks {
            return Ok(true);
        }
        self.inner.poll_quit()
    }

    fn paced(&self) -> bool {
        self.inner.paced()
    }
}
