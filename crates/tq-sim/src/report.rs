//! Per-pass bookkeeping.

use crate::Job;

/// Why a department was passed over without a write.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Weekend, or the schedule's open time has already passed.
    Gated,
    /// The close time has passed; a write would expire immediately.
    WindowClosed,
    /// `current` exists but `total` does not.
    NoTotal,
    /// `current` vanished between the two reads.
    NoCurrent,
}

/// What one job did to one department.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DepartmentOutcome {
    /// The counter was absent and has been created with `"1"`.
    Seeded,
    /// The counter was rewritten with `to`.
    Written { from: i64, to: i64 },
    /// `current` already equals (or exceeds) `total`.
    Unchanged,
    Skipped(SkipReason),
}

/// Summary of one pass over the department list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassReport {
    pub job:       Job,
    pub seeded:    usize,
    pub written:   usize,
    pub unchanged: usize,
    pub skipped:   usize,
    /// Departments whose step errored under a log-and-continue policy.
    pub failed:    usize,
}

impl PassReport {
    pub fn new(job: Job) -> Self {
        Self { job, seeded: 0, written: 0, unchanged: 0, skipped: 0, failed: 0 }
    }

    pub fn record(&mut self, outcome: DepartmentOutcome) {
        match outcome {
            DepartmentOutcome::Seeded          => self.seeded += 1,
            DepartmentOutcome::Written { .. }  => self.written += 1,
            DepartmentOutcome::Unchanged       => self.unchanged += 1,
            DepartmentOutcome::Skipped(_)      => self.skipped += 1,
        }
    }

    /// Departments that reached the store and changed it.
    pub fn mutations(&self) -> usize {
        self.seeded + self.written
    }

    pub fn visited(&self) -> usize {
        self.seeded + self.written + self.unchanged + self.skipped + self.failed
    }
}
