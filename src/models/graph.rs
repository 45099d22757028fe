//! Interest-graph data model: co-occurrence structure over viewed titles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::session::{ActorId, TitleId};

/// One actor's contribution of an ordered title pair, produced by the
/// per-actor cross-join. Self pairs survive until `simplify` drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePair {
    pub title_a: TitleId,
    pub title_b: TitleId,
    pub actor: ActorId,
}

/// A node occurrence: one entry per (title, contributing actor), so a title
/// shared by several actors renders as repeated labels rather than a merged
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestNode {
    pub title: TitleId,
    pub actor: ActorId,
}

/// An undirected simple edge between two distinct titles. Endpoints are
/// stored in lexicographic order; `multiplicity` collapses duplicate rows by
/// maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestEdge {
    pub title_a: TitleId,
    pub title_b: TitleId,
    pub multiplicity: u32,
}

/// The simplified co-occurrence graph plus its 2-D embedding.
///
/// `positions` is keyed by distinct title (the graph-theoretic node set);
/// `nodes` lists occurrences for labeling. `sampled` is the non-fatal
/// capacity signal: when set, the pair cap fired and the edge set is a
/// uniform sample, i.e. approximate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestGraph {
    pub nodes: Vec<InterestNode>,
    pub edges: Vec<InterestEdge>,
    pub positions: BTreeMap<TitleId, (f64, f64)>,
    pub sampled: bool,
}

impl InterestGraph {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            positions: BTreeMap::new(),
            sampled: false,
        }
    }

    /// Distinct titles, in lexicographic order.
    pub fn titles(&self) -> Vec<&TitleId> {
        let mut titles: Vec<&TitleId> = self.nodes.iter().map(|n| &n.title).collect();
        titles.sort();
        titles.dedup();
        titles
    }
}

/// Exact pairwise shared-title stat: of `actor_a`'s viewing set, how many
/// titles are also in `actor_b`'s set. Never affected by graph sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedTitleStat {
    pub actor_a: ActorId,
    pub actor_b: ActorId,
    pub shared_count: usize,
    pub pct: f64,
    /// Set on the self pair: the 100% "exclusive" baseline.
    pub exclusive: bool,
}
