//! Simulator configuration.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Upper bound (exclusive) for the per-department jitter, in milliseconds.
pub const MAX_JITTER_MS: u64 = 60_000;

/// Which department field gates the physical-person jobs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalScheduleSource {
    /// Read `scheduleJurL`, the same field the juridical jobs use.  This is
    /// what downstream consumers of the counters have always observed.
    #[default]
    Juridical,
    /// Read `scheduleFl`.
    Physical,
}

/// Top-level simulator configuration.
///
/// Typically built from CLI flags or a JSON file by the application crate and
/// passed to [`SimulatorBuilder`][crate::SimulatorBuilder].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Enforce weekday and time-of-day gating.  When `false` every department
    /// is always eligible and counters get a fixed 60-minute TTL.
    pub gating_enabled: bool,

    /// Delay before each department's store access, drawn uniformly from this
    /// range of milliseconds.  An empty range disables the delay.
    pub jitter_ms: Range<u64>,

    /// Schedule field used by `add_individual_ticket` and
    /// `load_individual_all_ticket`.
    pub physical_schedule: PhysicalScheduleSource,

    /// Root RNG seed.  Each job thread derives its own stream from it.
    pub seed: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            gating_enabled:    true,
            jitter_ms:         1..60,
            physical_schedule: PhysicalScheduleSource::Juridical,
            seed:              0,
        }
    }
}

impl SimulatorConfig {
    /// Reject configurations the jobs cannot honour.
    pub fn validate(&self) -> SimResult<()> {
        if self.jitter_ms.end > MAX_JITTER_MS {
            return Err(SimError::Config(format!(
                "jitter_ms upper bound {} exceeds {MAX_JITTER_MS} ms",
                self.jitter_ms.end
            )));
        }
        if self.jitter_ms.start > self.jitter_ms.end {
            return Err(SimError::Config(format!(
                "jitter_ms range {}..{} is inverted",
                self.jitter_ms.start, self.jitter_ms.end
            )));
        }
        Ok(())
    }
}
