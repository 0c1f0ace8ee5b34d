//! Request execution and load run orchestration.

use crate::config::RunConfig;
use crate::counters::RunCounters;
use crate::error::RequestError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// How many failures get an individual log line before falling back to
/// count-only reporting.
pub const DETAILED_FAILURE_LIMIT: u64 = 5;

/// Aggregate outcome of one load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub success: u64,
    pub failed: u64,
    pub elapsed: Duration,
}

/// Executes load runs with controlled concurrency.
pub struct Dispatcher {
    client: reqwest::Client,
    config: RunConfig,
}

impl Dispatcher {
    /// Create a new dispatcher. Fails if the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn new(config: RunConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Issue exactly `requests` GET calls against the configured URL, never
    /// allowing more than `parallel` to be in flight at once.
    ///
    /// The summary is produced only after every spawned unit of work has
    /// finished, so it observes each request's terminal outcome.
    pub async fn run(&self) -> anyhow::Result<RunSummary> {
        let counters = Arc::new(RunCounters::new());
        let semaphore = Arc::new(Semaphore::new(self.config.parallel));
        let started = Instant::now();
        let mut tasks: JoinSet<()> = JoinSet::new();

        for i in 0..self.config.requests {
            // Blocks the submission loop while all slots are busy.
            let permit = semaphore.clone().acquire_owned().await?;
            let submitted = i + 1;

            let client = self.client.clone();
            let url = self.config.url.clone();
            let task_counters = counters.clone();

            tasks.spawn(async move {
                // The permit is held for the lifetime of this task and
                // released when it drops, on every exit path.
                let _permit = permit;

                match execute_request(&client, &url).await {
                    Ok(()) => task_counters.record_success(),
                    Err(err) => {
                        let nth = task_counters.record_failure();
                        if should_log_failure(nth) {
                            println!("ERR#{}: {} {}", nth, err.category(), err);
                        }
                    }
                }
            });

            if should_log_progress(submitted, self.config.log_every) {
                let (success, failed) = counters.snapshot();
                println!(
                    "queued: {}/{}, success: {}, failed: {}, elapsed: {:.1}s",
                    submitted,
                    self.config.requests,
                    success,
                    failed,
                    started.elapsed().as_secs_f64()
                );
            }
        }

        // Join barrier: wait for every outstanding unit of work.
        while tasks.join_next().await.is_some() {}

        let (success, failed) = counters.snapshot();
        Ok(RunSummary {
            success,
            failed,
            elapsed: started.elapsed(),
        })
    }
}

/// Whether a progress line is due after `submitted` requests.
fn should_log_progress(submitted: u64, log_every: u64) -> bool {
    submitted % log_every == 0
}

/// Whether the `nth` failure gets an individual log line. Later failures
/// are counted but not printed, bounding log volume under mass failure.
fn should_log_failure(nth: u64) -> bool {
    nth <= DETAILED_FAILURE_LIMIT
}

/// Execute a single GET and classify the outcome.
async fn execute_request(client: &reqwest::Client, url: &str) -> Result<(), RequestError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(RequestError::Status(status.as_u16()))
    }
}
