//! The four simulation jobs and their static contracts.
//!
//! | Job                         | Counter | Person    | Period (s) | Growth    | Failure policy   |
//! |-----------------------------|---------|-----------|------------|-----------|------------------|
//! | `add_juridical_ticket`      | current | juridical | `[1, 60)`  | +1 ≤ total| fail-fast        |
//! | `load_juridical_all_ticket` | total   | juridical | `[1, 50)`  | `[t, t+10)` | log-and-continue |
//! | `add_individual_ticket`     | current | physical  | `[1, 15)`  | +1 ≤ total| fail-fast        |
//! | `load_individual_all_ticket`| total   | physical  | `[1, 10)`  | `[t, t+20)` | log-and-continue |
//!
//! The growth bounds are read by downstream dashboards; treat them as a
//! published contract.

use std::fmt;
use std::ops::Range;

use tq_core::{CounterKind, PersonType};

/// Exclusive growth bound of the juridical `total` counter per write.
pub const JURIDICAL_TOTAL_GROWTH: i64 = 10;

/// Exclusive growth bound of the physical `total` counter per write.
pub const PHYSICAL_TOTAL_GROWTH: i64 = 20;

/// What a job does when one department fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the pass and return the error; later departments are untouched.
    FailFast,
    /// Log the error, count it, and move on to the next department.
    LogAndContinue,
}

/// One of the four periodic jobs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    AddJuridicalTicket,
    LoadJuridicalAllTicket,
    AddIndividualTicket,
    LoadIndividualAllTicket,
}

impl Job {
    pub const ALL: [Job; 4] = [
        Job::AddJuridicalTicket,
        Job::LoadJuridicalAllTicket,
        Job::AddIndividualTicket,
        Job::LoadIndividualAllTicket,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Job::AddJuridicalTicket      => "add_juridical_ticket",
            Job::LoadJuridicalAllTicket  => "load_juridical_all_ticket",
            Job::AddIndividualTicket     => "add_individual_ticket",
            Job::LoadIndividualAllTicket => "load_individual_all_ticket",
        }
    }

    pub fn person_type(self) -> PersonType {
        match self {
            Job::AddJuridicalTicket | Job::LoadJuridicalAllTicket => PersonType::Juridical,
            Job::AddIndividualTicket | Job::LoadIndividualAllTicket => PersonType::Physical,
        }
    }

    /// The counter this job seeds and rewrites.
    pub fn kind(self) -> CounterKind {
        match self {
            Job::AddJuridicalTicket | Job::AddIndividualTicket => CounterKind::Current,
            Job::LoadJuridicalAllTicket | Job::LoadIndividualAllTicket => CounterKind::Total,
        }
    }

    /// Delay between the end of one pass and the start of the next, drawn
    /// uniformly from this range of seconds.
    pub fn period_secs(self) -> Range<u64> {
        match self {
            Job::AddJuridicalTicket      => 1..60,
            Job::LoadJuridicalAllTicket  => 1..50,
            Job::AddIndividualTicket     => 1..15,
            Job::LoadIndividualAllTicket => 1..10,
        }
    }

    /// Exclusive upper bound on how far a `total` write may exceed the value
    /// it replaces.  `None` for the `current` jobs.
    pub fn growth_bound(self) -> Option<i64> {
        match self {
            Job::LoadJuridicalAllTicket  => Some(JURIDICAL_TOTAL_GROWTH),
            Job::LoadIndividualAllTicket => Some(PHYSICAL_TOTAL_GROWTH),
            Job::AddJuridicalTicket | Job::AddIndividualTicket => None,
        }
    }

    pub fn failure_policy(self) -> FailurePolicy {
        match self.kind() {
            CounterKind::Current => FailurePolicy::FailFast,
            CounterKind::Total   => FailurePolicy::LogAndContinue,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
