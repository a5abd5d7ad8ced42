//! ticket-sim: runs the four ticket-counter jobs against a counter store.
//!
//! Departments come from the public catalog endpoint unless `--catalog-file`
//! points at a local `.json` or `.csv` export.  Counters are written to Redis
//! with `--redis-url`; otherwise they live in an in-memory TTL store whose
//! contents are logged every `--report-interval-secs`.
//!
//! ```text
//! ticket-sim --redis-url redis://127.0.0.1:6379/
//! ticket-sim --catalog-file departments.json --no-time-check --run-for-secs 120
//! RUST_LOG=tq_sim=debug ticket-sim --seed 7
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tq_catalog::{CsvFileCatalog, DepartmentCatalog, HttpCatalog, JsonFileCatalog};
use tq_sim::{JobRunner, PhysicalScheduleSource, SimulatorBuilder, SimulatorConfig};
use tq_store::{InMemoryStore, KeyValueStore, RedisStore};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "ticket-sim")]
#[command(version, about = "Simulate ticket counters for every department", long_about = None)]
struct Args {
    /// JSON file holding a `SimulatorConfig`; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable weekday and business-hours gating.
    #[arg(long)]
    no_time_check: bool,

    /// Department catalog endpoint.
    #[arg(long, conflicts_with = "catalog_file")]
    catalog_url: Option<String>,

    /// Local department catalog (`.json` or `.csv`).
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Redis server for the counters, e.g. `redis://127.0.0.1:6379/`.
    /// Counters stay in memory when absent.
    #[arg(long)]
    redis_url: Option<String>,

    /// Root RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound (exclusive) of the per-department delay, in milliseconds.
    #[arg(long)]
    jitter_max_ms: Option<u64>,

    /// Schedule field that gates the physical-person jobs.
    #[arg(long, value_enum)]
    physical_schedule: Option<ScheduleField>,

    /// Seconds between store summaries.
    #[arg(long, default_value_t = 30)]
    report_interval_secs: u64,

    /// Stop after this many seconds.  Runs until killed when absent.
    #[arg(long)]
    run_for_secs: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScheduleField {
    Juridical,
    Physical,
}

impl From<ScheduleField> for PhysicalScheduleSource {
    fn from(field: ScheduleField) -> Self {
        match field {
            ScheduleField::Juridical => PhysicalScheduleSource::Juridical,
            ScheduleField::Physical  => PhysicalScheduleSource::Physical,
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn load_config(args: &Args) -> Result<SimulatorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimulatorConfig::default(),
    };

    if args.no_time_check {
        config.gating_enabled = false;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max) = args.jitter_max_ms {
        config.jitter_ms = config.jitter_ms.start.min(max)..max;
    }
    if let Some(field) = args.physical_schedule {
        config.physical_schedule = field.into();
    }
    Ok(config)
}

fn select_catalog(args: &Args) -> Result<Box<dyn DepartmentCatalog>> {
    if let Some(path) = &args.catalog_file {
        return file_catalog(path);
    }
    Ok(match &args.catalog_url {
        Some(url) => Box::new(HttpCatalog::new(url.clone())),
        None => Box::new(HttpCatalog::default()),
    })
}

fn file_catalog(path: &Path) -> Result<Box<dyn DepartmentCatalog>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Box::new(JsonFileCatalog::new(path))),
        Some("csv") => Ok(Box::new(CsvFileCatalog::new(path))),
        _ => bail!("unsupported catalog file {}: expected .json or .csv", path.display()),
    }
}

/// The store the jobs write to.  Only the in-memory one can be summarised.
enum Backend {
    Memory(Arc<InMemoryStore>),
    Redis(Arc<RedisStore>),
}

impl Backend {
    fn select(args: &Args) -> Result<Backend> {
        Ok(match &args.redis_url {
            Some(url) => {
                let store = RedisStore::connect(url).with_context(|| format!("connecting to {url}"))?;
                info!(url = %url, "writing counters to redis");
                Backend::Redis(Arc::new(store))
            }
            None => Backend::Memory(Arc::new(InMemoryStore::new())),
        })
    }

    fn shared(&self) -> Arc<dyn KeyValueStore> {
        match self {
            Backend::Memory(store) => Arc::clone(store) as Arc<dyn KeyValueStore>,
            Backend::Redis(store) => Arc::clone(store) as Arc<dyn KeyValueStore>,
        }
    }

    fn report(&self, elapsed: Duration) -> Result<()> {
        let elapsed_secs = elapsed.as_secs();
        match self {
            Backend::Memory(store) => {
                let purged = store.purge_expired()?;
                let live = store.len()?;
                info!(live, purged, elapsed_secs, "store summary");
                for (key, value) in store.snapshot()? {
                    debug!(key = %key, value = %value, "counter");
                }
            }
            Backend::Redis(store) => match store.ping() {
                Ok(()) => info!(elapsed_secs, "redis reachable"),
                Err(e) => warn!(elapsed_secs, error = %e, "redis unreachable"),
            },
        }
        Ok(())
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;
    let catalog = select_catalog(&args)?;
    let backend = Backend::select(&args)?;

    let sim = SimulatorBuilder::new(config, backend.shared())
        .build(&*catalog)
        .context("starting simulator")?;
    let runner = JobRunner::spawn_all(Arc::new(sim))?;

    let started = Instant::now();
    let deadline = args.run_for_secs.map(Duration::from_secs);
    let interval = Duration::from_secs(args.report_interval_secs.max(1));

    loop {
        let remaining = deadline.map(|d| d.saturating_sub(started.elapsed()));
        if remaining.is_some_and(|r| r.is_zero()) {
            break;
        }
        thread::sleep(remaining.map_or(interval, |r| r.min(interval)));

        backend.report(started.elapsed())?;
    }

    info!("stopping jobs");
    runner.stop();
    runner.join()?;
    Ok(())
}
