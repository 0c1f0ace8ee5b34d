//! Echo server entry point.

use anyhow::Result;
use clap::Parser;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEFAULT_URL: &str = "http://localhost:5055";

#[derive(Parser, Debug)]
#[command(name = "echo-server")]
#[command(about = "Fixed-content HTTP echo server")]
struct Args {
    /// Listen address (overrides the HTTPLEAK_URL environment variable)
    #[arg(short, long)]
    listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let url = args
        .listen
        .or_else(|| env::var("HTTPLEAK_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let addr = echo_server::bind_target(&url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Listening");

    axum::serve(listener, echo_server::router()).await?;

    Ok(())
}
