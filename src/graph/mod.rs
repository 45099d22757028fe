pub mod builder;
pub mod config;
pub mod layout;
pub mod sample;
pub mod shared;

pub use builder::{build_title_pairs, simplify};
pub use config::GraphConfig;
pub use layout::layout;
pub use sample::cap_and_sample;
pub use shared::shared_title_table;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ActorId, InterestGraph, TitleId};

/// Full interest-graph pipeline: cross-join, pair cap, simplification,
/// layout. The returned graph carries the capacity-exceeded flag when
/// sampling fired.
pub fn build_graph(
    titles_by_actor: &BTreeMap<ActorId, BTreeSet<TitleId>>,
    config: &GraphConfig,
) -> InterestGraph {
    let pairs = build_title_pairs(titles_by_actor);
    let (pairs, sampled) = cap_and_sample(pairs, config);
    let mut graph = simplify(&pairs);
    graph.sampled = sampled;
    graph.positions = layout(&graph, config.layout_seed, config.layout_iterations);
    graph
}
