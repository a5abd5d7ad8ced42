//! Periodic job scheduler.
//!
//! One OS thread per job.  Each job draws its delay once, at spawn:
//!
//! ```text
//! delay = uniform(job.period_secs())
//! loop:
//!   run_pass(job)            ← errors are logged, never fatal to the thread
//!   sleep(delay)
//! ```
//!
//! The delay counts from the end of a pass, so a slow pass pushes the next
//! one back rather than overlapping it.  Different jobs run fully
//! concurrently against the same store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use tq_core::{Clock, SimRng};
use tq_store::KeyValueStore;

use crate::{CounterSimulator, Job, SimError, SimResult};

/// Longest uninterrupted sleep; bounds how long `stop()` takes to be seen.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Cloneable handle that asks every job thread to finish.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Sleep up to `total`, returning early once the signal is raised.
    fn sleep(&self, total: Duration) {
        let deadline = Instant::now() + total;
        while !self.is_raised() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(STOP_POLL));
        }
    }
}

struct JobThread {
    job:    Job,
    delay:  Duration,
    handle: JoinHandle<()>,
}

/// Running job threads.
pub struct JobRunner {
    stop:    StopSignal,
    threads: Vec<JobThread>,
}

impl JobRunner {
    /// Start every job in `jobs` on its own thread.
    ///
    /// Job `i` draws its delay, jitter and growth values from
    /// `SimRng::new(seed).child(i)`.  The delay is drawn once and kept for
    /// the life of the thread.
    pub fn spawn<S, C>(sim: Arc<CounterSimulator<S, C>>, jobs: &[Job]) -> SimResult<JobRunner>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
    {
        let stop = StopSignal::default();
        let mut root = SimRng::new(sim.config().seed);
        let mut runner = JobRunner { stop: stop.clone(), threads: Vec::with_capacity(jobs.len()) };

        for (i, &job) in jobs.iter().enumerate() {
            let sim = Arc::clone(&sim);
            let stop = stop.clone();
            let mut rng = root.child(i as u64);
            let delay = rng.secs_in(&job.period_secs());
            let spawned = thread::Builder::new()
                .name(format!("tq-{}", job.name()))
                .spawn(move || job_loop(&sim, job, delay, rng, &stop));

            match spawned {
                Ok(handle) => {
                    info!(job = job.name(), delay_secs = delay.as_secs(), "job scheduled");
                    runner.threads.push(JobThread { job, delay, handle });
                }
                Err(e) => {
                    // Do not leave already-started jobs running unowned.
                    runner.stop();
                    if let Err(join_err) = runner.join() {
                        warn!(error = %join_err, "job failed while unwinding a partial start");
                    }
                    return Err(SimError::Spawn(e));
                }
            }
        }

        info!(jobs = runner.threads.len(), "job threads started");
        Ok(runner)
    }

    /// Start all four jobs.
    pub fn spawn_all<S, C>(sim: Arc<CounterSimulator<S, C>>) -> SimResult<JobRunner>
    where
        S: KeyValueStore + 'static,
        C: Clock + 'static,
    {
        Self::spawn(sim, &Job::ALL)
    }

    /// The fixed delay each job sleeps between passes.
    pub fn delays(&self) -> Vec<(Job, Duration)> {
        self.threads.iter().map(|t| (t.job, t.delay)).collect()
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Ask every thread to finish after its in-flight pass.
    pub fn stop(&self) {
        self.stop.raise();
    }

    /// Wait for every thread.  Reports the first job whose thread panicked.
    pub fn join(self) -> SimResult<()> {
        let mut result = Ok(());
        for JobThread { job, handle, .. } in self.threads {
            if handle.join().is_err() && result.is_ok() {
                result = Err(SimError::JobPanicked(job.name()));
            }
        }
        result
    }
}

fn job_loop<S: KeyValueStore, C: Clock>(
    sim:     &CounterSimulator<S, C>,
    job:     Job,
    delay:   Duration,
    mut rng: SimRng,
    stop:    &StopSignal,
) {
    while !stop.is_raised() {
        match sim.run_pass(job, &mut rng) {
            Ok(report) => info!(
                job       = job.name(),
                seeded    = report.seeded,
                written   = report.written,
                unchanged = report.unchanged,
                skipped   = report.skipped,
                failed    = report.failed,
                "pass finished"
            ),
            Err(e) => error!(job = job.name(), error = %e, "pass aborted"),
        }
        stop.sleep(delay);
    }
    info!(job = job.name(), "job stopped");
}
