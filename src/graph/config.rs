/// Configuration for interest-graph construction with tunable thresholds.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Pair cap: maximum title-pair rows processed before uniform sampling
    /// kicks in. Sampling trades accuracy for memory and is surfaced via the
    /// graph's `sampled` flag.
    pub max_pairs: usize,

    /// Seed for the pair-sampling RNG; fixed so sampled output is
    /// bit-reproducible run to run.
    pub sample_seed: u64,

    /// Seed for the layout's initial scatter.
    pub layout_seed: u64,

    /// Force-directed iteration count.
    pub layout_iterations: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_pairs: 2_000_000,
            sample_seed: 7,
            layout_seed: 7,
            layout_iterations: 50,
        }
    }
}
