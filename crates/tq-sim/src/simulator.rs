//! The `CounterSimulator` and its per-department step.

use std::thread;

use tracing::{debug, error, info, warn};

use tq_catalog::Department;
use tq_core::{Clock, CounterKey, CounterKind, LocalClock, PersonType, SimRng};
use tq_schedule::TimeWindowGate;
use tq_store::KeyValueStore;

use crate::config::PhysicalScheduleSource;
use crate::{
    DepartmentOutcome, FailurePolicy, Job, PassReport, SimError, SimResult, SimulatorConfig,
    SkipReason,
};

/// Value written when a counter is first observed missing.
pub const SEED_VALUE: &str = "1";

// ── CounterSimulator ──────────────────────────────────────────────────────────

/// The ticket-counter engine.
///
/// Holds the department list (loaded once, never refreshed), the
/// business-hours gate, and the store.  Each job operation walks the whole
/// department list and, per department:
///
/// 1. **Jitter**: sleep a random sub-minute delay.
/// 2. **Gate**: skip unless the day and time are allowed for the schedule.
/// 3. **TTL**: minutes until the schedule closes; skip if non-positive.
/// 4. **Read-modify-write**: seed `"1"` if the counter is absent, otherwise
///    apply the job's update rule.  The read and the write are separate store
///    calls and nothing stops another job from writing in between.
///
/// All methods take `&self`; share the simulator across job threads with an
/// `Arc`.  Create via [`SimulatorBuilder`][crate::SimulatorBuilder].
pub struct CounterSimulator<S: KeyValueStore, C: Clock = LocalClock> {
    pub(crate) config:      SimulatorConfig,
    pub(crate) departments: Vec<Department>,
    pub(crate) gate:        TimeWindowGate<C>,
    pub(crate) store:       S,
}

impl<S: KeyValueStore, C: Clock> CounterSimulator<S, C> {
    // ── Job operations ────────────────────────────────────────────────────

    /// Issue one juridical ticket per eligible department.  Fail-fast.
    pub fn add_juridical_ticket(&self, rng: &mut SimRng) -> SimResult<PassReport> {
        self.run_pass(Job::AddJuridicalTicket, rng)
    }

    /// Grow juridical capacity by `[0, 10)` per eligible department.
    /// Log-and-continue.
    pub fn load_juridical_all_ticket(&self, rng: &mut SimRng) -> SimResult<PassReport> {
        self.run_pass(Job::LoadJuridicalAllTicket, rng)
    }

    /// Issue one physical-person ticket per eligible department.  Fail-fast.
    pub fn add_individual_ticket(&self, rng: &mut SimRng) -> SimResult<PassReport> {
        self.run_pass(Job::AddIndividualTicket, rng)
    }

    /// Grow physical-person capacity by `[0, 20)` per eligible department.
    /// Log-and-continue.
    pub fn load_individual_all_ticket(&self, rng: &mut SimRng) -> SimResult<PassReport> {
        self.run_pass(Job::LoadIndividualAllTicket, rng)
    }

    /// Run one pass of `job` over every department.
    ///
    /// Under [`FailurePolicy::FailFast`] the first error ends the pass and is
    /// returned wrapped in [`SimError::Aborted`].  Under
    /// [`FailurePolicy::LogAndContinue`] errors are logged and counted in
    /// [`PassReport::failed`]; the pass itself always succeeds.
    pub fn run_pass(&self, job: Job, rng: &mut SimRng) -> SimResult<PassReport> {
        info!(job = job.name(), departments = self.departments.len(), "pass started");
        let mut report = PassReport::new(job);

        for department in &self.departments {
            let delay = rng.millis_in(&self.config.jitter_ms);
            if !delay.is_zero() {
                thread::sleep(delay);
            }

            match self.step(job, department, rng) {
                Ok(outcome) => {
                    debug!(job = job.name(), department = %department.id, ?outcome, "department done");
                    report.record(outcome);
                }
                Err(e) => match job.failure_policy() {
                    FailurePolicy::FailFast => {
                        return Err(SimError::Aborted {
                            job:        job.name(),
                            department: department.id,
                            source:     Box::new(e),
                        });
                    }
                    FailurePolicy::LogAndContinue => {
                        error!(job = job.name(), department = %department.id, error = %e, "department failed");
                        report.failed += 1;
                    }
                },
            }
        }

        Ok(report)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn gate(&self) -> &TimeWindowGate<C> {
        &self.gate
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The schedule string that gates `person_type` at `department`.
    pub fn schedule_for<'d>(&self, department: &'d Department, person_type: PersonType) -> &'d str {
        match (person_type, self.config.physical_schedule) {
            (PersonType::Physical, PhysicalScheduleSource::Physical) => {
                department.schedule(PersonType::Physical)
            }
            _ => department.schedule(PersonType::Juridical),
        }
    }

    // ── Per-department step ───────────────────────────────────────────────

    fn step(&self, job: Job, department: &Department, rng: &mut SimRng) -> SimResult<DepartmentOutcome> {
        let schedule = self.schedule_for(department, job.person_type());

        if !self.gate.admits(schedule)? {
            return Ok(DepartmentOutcome::Skipped(SkipReason::Gated));
        }

        let ttl = self.gate.time_to_live(schedule)?;
        if ttl <= 0 {
            warn!(job = job.name(), department = %department.id, ttl, "window already closed");
            return Ok(DepartmentOutcome::Skipped(SkipReason::WindowClosed));
        }

        let key = CounterKey::new(department.id, job.person_type(), job.kind());
        let key_str = key.to_string();

        let Some(raw) = self.store.get(&key_str)? else {
            self.store.set(&key_str, SEED_VALUE, ttl)?;
            return Ok(DepartmentOutcome::Seeded);
        };

        match (job.kind(), job.growth_bound()) {
            (CounterKind::Total, Some(bound)) => self.grow_total(&key_str, &raw, bound, ttl, rng),
            _ => self.advance_current(key, ttl),
        }
    }

    /// `current + 1` if still below `total`.  Re-reads `current` after
    /// `total`, so a counter that expired in between is skipped.
    fn advance_current(&self, key: CounterKey, ttl: i64) -> SimResult<DepartmentOutcome> {
        let total_key = key.total().to_string();
        let current_key = key.current().to_string();

        let Some(total_raw) = self.store.get(&total_key)? else {
            return Ok(DepartmentOutcome::Skipped(SkipReason::NoTotal));
        };
        let total = parse_counter(&total_key, &total_raw)?;

        let Some(current_raw) = self.store.get(&current_key)? else {
            return Ok(DepartmentOutcome::Skipped(SkipReason::NoCurrent));
        };
        let current = parse_counter(&current_key, &current_raw)?;

        if current >= total {
            return Ok(DepartmentOutcome::Unchanged);
        }
        let next = current + 1;
        self.store.set(&current_key, &next.to_string(), ttl)?;
        Ok(DepartmentOutcome::Written { from: current, to: next })
    }

    /// Replace `total` with a uniform draw from `[total, total + bound)`.
    fn grow_total(
        &self,
        key:   &str,
        raw:   &str,
        bound: i64,
        ttl:   i64,
        rng:   &mut SimRng,
    ) -> SimResult<DepartmentOutcome> {
        let total = parse_counter(key, raw)?;
        let upper = total.checked_add(bound).ok_or_else(|| SimError::InvalidCounter {
            key:   key.to_owned(),
            value: raw.to_owned(),
        })?;
        let next = rng.gen_range(total..upper);
        self.store.set(key, &next.to_string(), ttl)?;
        Ok(DepartmentOutcome::Written { from: total, to: next })
    }
}

fn parse_counter(key: &str, raw: &str) -> SimResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| SimError::InvalidCounter {
        key:   key.to_owned(),
        value: raw.to_owned(),
    })
}
