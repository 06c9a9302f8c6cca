use std::time::{Duration, Instant};

/// Runs `f` and returns its output with the monotonic wall time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let output = f();
    (output, started.elapsed())
}

/// Seconds with exactly two decimals, e.g. `1.50`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}
