//! Report module: result type for a timed query and the printed output line.

use std::time::Duration;

/// Row count and elapsed wall-clock time for one timed query.
#[derive(Debug, Clone, Copy)]
pub struct QueryTiming {
    pub rows: usize,
    pub elapsed: Duration,
}

impl QueryTiming {
    pub fn new(rows: usize, elapsed: Duration) -> Self {
        Self { rows, elapsed }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Print the result line for one benchmark, e.g.
/// `Loaded 2000 products (summary) in 0.0042 seconds`.
pub fn print_load(label: &str, timing: &QueryTiming) {
    println!(
        "Loaded {} {} in {:.4} seconds",
        timing.rows,
        label,
        timing.elapsed_secs()
    );
}
