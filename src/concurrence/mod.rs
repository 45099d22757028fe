pub mod aggregate;
pub mod algorithm;
pub mod clock;

pub use aggregate::{aggregate_by_actor, pairwise_overlap, pairwise_overlap_matrix};
pub use algorithm::{compute_overlap_flags, compute_overlap_flags_naive};
pub use clock::time_of_day_overlap_distribution;
