mod config;
mod demo;
mod error;
mod fetch;
mod logging;
mod timing;

#[cfg(test)]
mod testing;

use config::DemoConfig;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = DemoConfig::default();
    let stdout = std::io::stdout();
    let report = demo::run_demo(&config, &mut stdout.lock())?;

    tracing::info!(
        sequential_chars = report.sequential_counts.iter().sum::<usize>(),
        concurrent_chars = report.concurrent_counts.iter().sum::<usize>(),
        speedup = report.sequential_elapsed.as_secs_f64()
            / report.concurrent_elapsed.as_secs_f64().max(f64::EPSILON),
        "demo complete"
    );

    Ok(())
}
