//! Title-pair generation and graph simplification.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::log_info;
use crate::models::{ActorId, InterestEdge, InterestGraph, InterestNode, TitleId, TitlePair};

const ENABLE_LOGS: bool = false;

/// For each actor, the full cross-join of their viewed-titles set with
/// itself: one row per actor per ordered title pair. Self pairs are produced
/// here and dropped by `simplify`, so single-title actors still contribute
/// their node.
pub fn build_title_pairs(
    titles_by_actor: &BTreeMap<ActorId, BTreeSet<TitleId>>,
) -> Vec<TitlePair> {
    let mut pairs = Vec::new();
    for (actor, titles) in titles_by_actor {
        for title_a in titles {
            for title_b in titles {
                pairs.push(TitlePair {
                    title_a: title_a.clone(),
                    title_b: title_b.clone(),
                    actor: actor.clone(),
                });
            }
        }
    }
    pairs
}

/// Collapse pair rows into an undirected simple graph: self-loops dropped,
/// at most one edge per unordered title pair, duplicate multiplicities
/// combined by maximum. Idempotent.
pub fn simplify(pairs: &[TitlePair]) -> InterestGraph {
    // Node occurrences: one per (title, actor), ordered for stable output.
    let mut occurrences: BTreeSet<(TitleId, ActorId)> = BTreeSet::new();
    for pair in pairs {
        occurrences.insert((pair.title_a.clone(), pair.actor.clone()));
        occurrences.insert((pair.title_b.clone(), pair.actor.clone()));
    }

    let mut graph: UnGraph<TitleId, u32> = UnGraph::new_undirected();
    let mut index_of: BTreeMap<TitleId, NodeIndex> = BTreeMap::new();
    for (title, _) in &occurrences {
        index_of
            .entry(title.clone())
            .or_insert_with(|| graph.add_node(title.clone()));
    }

    for pair in pairs {
        if pair.title_a == pair.title_b {
            continue;
        }
        let a = index_of[&pair.title_a];
        let b = index_of[&pair.title_b];
        match graph.find_edge(a, b) {
            Some(edge) => {
                let weight = graph[edge];
                graph[edge] = weight.max(1);
            }
            None => {
                graph.add_edge(a, b, 1);
            }
        }
    }

    log_info!(
        "simplified {} pair rows into {} nodes / {} edges",
        pairs.len(),
        graph.node_count(),
        graph.edge_count()
    );

    let nodes = occurrences
        .into_iter()
        .map(|(title, actor)| InterestNode { title, actor })
        .collect();

    let mut edges: Vec<InterestEdge> = graph
        .edge_references()
        .map(|edge| {
            let mut endpoints = [
                graph[edge.source()].clone(),
                graph[edge.target()].clone(),
            ];
            endpoints.sort();
            let [title_a, title_b] = endpoints;
            InterestEdge {
                title_a,
                title_b,
                multiplicity: *edge.weight(),
            }
        })
        .collect();
    edges.sort_by(|x, y| (&x.title_a, &x.title_b).cmp(&(&y.title_a, &y.title_b)));

    InterestGraph {
        nodes,
        edges,
        positions: BTreeMap::new(),
        sampled: false,
    }
}
