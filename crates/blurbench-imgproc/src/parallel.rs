/// Controls how a convolver executes.
///
/// The strategy is an explicit per-call value rather than a process-wide
/// switch, so callers and tests can mix serial and parallel runs freely.
/// The parallel paths fan out over rows on the global rayon thread pool;
/// every worker writes a disjoint output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run in parallel for large images, serially otherwise.
    #[default]
    Auto,

    /// Process rows in parallel on the global rayon thread pool.
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Images with at least this many pixels run parallel under [`ExecutionStrategy::Auto`].
const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

impl ExecutionStrategy {
    /// Whether this strategy executes in parallel for `num_pixels` pixels.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Auto => num_pixels >= AUTO_PARALLEL_THRESHOLD,
            ExecutionStrategy::Parallel => true,
            ExecutionStrategy::Serial => false,
        }
    }
}
