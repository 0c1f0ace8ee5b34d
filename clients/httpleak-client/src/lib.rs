//! HTTP load-generation client.
//!
//! This crate provides tools to:
//! - Drive a configurable number of GET requests with bounded concurrency
//! - Classify per-request outcomes (transport error, timeout, bad status)
//! - Report aggregate success/failure counts and elapsed time

pub mod config;
pub mod counters;
pub mod error;
pub mod runner;

pub use config::RunConfig;
pub use counters::RunCounters;
pub use error::RequestError;
pub use runner::{Dispatcher, RunSummary};
