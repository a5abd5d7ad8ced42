//! Fluent builder for constructing a [`CounterSimulator`].

use tracing::info;

use tq_catalog::DepartmentCatalog;
use tq_core::{Clock, LocalClock};
use tq_schedule::TimeWindowGate;
use tq_store::KeyValueStore;

use crate::{CounterSimulator, SimResult, SimulatorConfig};

/// Fluent builder for [`CounterSimulator<S, C>`].
///
/// # Required inputs
///
/// - [`SimulatorConfig`]: gating flag, jitter range and seed
/// - `S: KeyValueStore`: where the counters live
/// - a [`DepartmentCatalog`], passed to [`build`][Self::build]
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default        |
/// |---------------|----------------|
/// | `.clock(c)`   | `LocalClock`   |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulatorBuilder::new(config, InMemoryStore::new())
///     .build(&HttpCatalog::default())?;
/// sim.add_juridical_ticket(&mut SimRng::new(7))?;
/// ```
pub struct SimulatorBuilder<S: KeyValueStore, C: Clock = LocalClock> {
    config: SimulatorConfig,
    store:  S,
    clock:  C,
}

impl<S: KeyValueStore> SimulatorBuilder<S, LocalClock> {
    pub fn new(config: SimulatorConfig, store: S) -> Self {
        Self { config, store, clock: LocalClock }
    }
}

impl<S: KeyValueStore, C: Clock> SimulatorBuilder<S, C> {
    /// Replace the wall clock the gate reads.
    pub fn clock<C2: Clock>(self, clock: C2) -> SimulatorBuilder<S, C2> {
        SimulatorBuilder { config: self.config, store: self.store, clock }
    }

    /// Validate the configuration, load the department list once, and return
    /// a ready-to-run simulator.
    ///
    /// A catalog failure is returned as-is; the caller cannot proceed
    /// without departments.
    pub fn build<K: DepartmentCatalog + ?Sized>(self, catalog: &K) -> SimResult<CounterSimulator<S, C>> {
        self.config.validate()?;

        let departments = catalog.load()?;
        info!(
            departments    = departments.len(),
            gating_enabled = self.config.gating_enabled,
            "simulator ready"
        );

        Ok(CounterSimulator {
            gate:        TimeWindowGate::with_clock(self.config.gating_enabled, self.clock),
            config:      self.config,
            departments,
            store:       self.store,
        })
    }
}
