//! `tq-sim`: the ticket-counter simulation engine.
//!
//! # Job model
//!
//! ```text
//! every uniform(job.period_secs()) seconds, for each department d:
//!   ① Jitter: sleep uniform(config.jitter_ms)
//!   ② Gate:   skip unless weekday ∧ open time still ahead
//!   ③ TTL:    minutes until close (60 with gating off); skip if ≤ 0
//!   ④ RMW:    get key; absent → set "1"
//!                       present → current: +1 while < total
//!                                 total:   uniform [t, t + growth)
//! ```
//!
//! Step ④ is two store round-trips with no lock between them.  Jobs that
//! share a department and person type may overwrite each other; that noise is
//! part of the simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`simulator`] | `CounterSimulator`, the four job operations             |
//! | [`builder`]   | `SimulatorBuilder`                                      |
//! | [`job`]       | `Job`, `FailurePolicy`, growth constants                |
//! | [`runner`]    | `JobRunner`, `StopSignal`, one thread per job           |
//! | [`report`]    | `PassReport`, `DepartmentOutcome`, `SkipReason`         |
//! | [`config`]    | `SimulatorConfig`, `PhysicalScheduleSource`             |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tq_catalog::HttpCatalog;
//! use tq_sim::{JobRunner, SimulatorBuilder, SimulatorConfig};
//! use tq_store::InMemoryStore;
//!
//! let sim = SimulatorBuilder::new(SimulatorConfig::default(), InMemoryStore::new())
//!     .build(&HttpCatalog::default())?;
//! let runner = JobRunner::spawn_all(Arc::new(sim))?;
//! runner.join()?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod job;
pub mod report;
pub mod runner;
pub mod simulator;


pub use builder::SimulatorBuilder;
pub use config::{MAX_JITTER_MS, PhysicalScheduleSource, SimulatorConfig};
pub use error::{SimError, SimResult};
pub use job::{FailurePolicy, JURIDICAL_TOTAL_GROWTH, Job, PHYSICAL_TOTAL_GROWTH};
pub use report::{DepartmentOutcome, PassReport, SkipReason};
pub use runner::{JobRunner, StopSignal};
pub use simulator::{CounterSimulator, SEED_VALUE};
