use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::config::DemoConfig;
use crate::fetch::{run_concurrent, run_sequential};
use crate::timing::{format_seconds, timed};

/// Character counts and timings from one full demo run.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub sequential_counts: Vec<usize>,
    pub sequential_elapsed: Duration,
    pub concurrent_counts: Vec<usize>,
    pub concurrent_elapsed: Duration,
}

/// Runs the sequential strategy, then the concurrent one, timing each in full.
///
/// A sequential failure aborts before the concurrent strategy starts.
pub fn run_demo<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<DemoReport> {
    writeln!(out, "Running synchronous demo...")?;
    let (sequential, sequential_elapsed) = timed(|| run_sequential(&config.urls, out));
    let sequential_counts = sequential.context("synchronous demo failed")?;
    info!(elapsed = ?sequential_elapsed, "synchronous demo finished");
    writeln!(
        out,
        "Synchronous demo took {} seconds\n",
        format_seconds(sequential_elapsed)
    )?;

    writeln!(out, "Running asynchronous demo...")?;
    let (concurrent, concurrent_elapsed) = timed(|| run_concurrent(&config.urls, out));
    let concurrent_counts = concurrent.context("asynchronous demo failed")?;
    info!(elapsed = ?concurrent_elapsed, "asynchronous demo finished");
    writeln!(
        out,
        "Asynchronous demo took {} seconds",
        format_seconds(concurrent_elapsed)
    )?;

    Ok(DemoReport {
        sequential_counts,
        sequential_elapsed,
        concurrent_counts,
        concurrent_elapsed,
    })
}
