//! Load client CLI.

use clap::Parser;
use httpleak_client::config::{
    self, RunConfig, DEFAULT_LOG_EVERY, DEFAULT_PARALLEL, DEFAULT_REQUESTS, DEFAULT_TIMEOUT_SECS,
};
use httpleak_client::Dispatcher;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "httpleak-client")]
#[command(about = "Bounded-concurrency HTTP load client", long_about = None)]
struct Args {
    /// Target URL
    #[arg(long, default_value = config::DEFAULT_URL)]
    url: String,

    /// Total number of requests to issue.
    /// Malformed values silently fall back to the default.
    #[arg(long)]
    requests: Option<String>,

    /// Maximum number of concurrent in-flight requests
    #[arg(long)]
    parallel: Option<String>,

    /// Emit a progress line every N submitted requests
    #[arg(long = "logEvery", alias = "log-every")]
    log_every: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeoutSeconds", alias = "timeout-seconds")]
    timeout_seconds: Option<String>,
}

impl Args {
    fn into_config(self) -> RunConfig {
        RunConfig {
            url: self.url,
            requests: config::parse_or(self.requests.as_deref(), DEFAULT_REQUESTS),
            parallel: config::parse_or(self.parallel.as_deref(), DEFAULT_PARALLEL),
            log_every: config::parse_or(self.log_every.as_deref(), DEFAULT_LOG_EVERY),
            timeout: Duration::from_secs(config::parse_or(
                self.timeout_seconds.as_deref(),
                DEFAULT_TIMEOUT_SECS,
            )),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    println!("url={}", config.url);
    println!(
        "requests={}, parallel={}, timeoutSeconds={}",
        config.requests,
        config.parallel,
        config.timeout.as_secs()
    );

    let dispatcher = Dispatcher::new(config)?;
    let summary = dispatcher.run().await?;

    println!(
        "done: success={}, failed={}, elapsed={:.1}s",
        summary.success,
        summary.failed,
        summary.elapsed.as_secs_f64()
    );

    Ok(())
}
