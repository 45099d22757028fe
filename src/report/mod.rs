//! Generic per-group aggregation helpers and the assembled report document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::concurrence::{
    aggregate_by_actor, compute_overlap_flags, pairwise_overlap_matrix,
    time_of_day_overlap_distribution,
};
use crate::graph::{build_graph, shared_title_table, GraphConfig};
use crate::models::{
    ActorId, ActorOverlap, ClockBucket, InterestGraph, PairOverlap, Session, SessionId,
    SharedTitleStat,
};
use crate::store::SessionStore;

/// Sum a value per group key. The workhorse behind every "hours by actor"
/// style table.
pub fn sum_by<I, T, K, FK, FV>(items: I, key: FK, value: FV) -> BTreeMap<K, f64>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> f64,
{
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(key(&item)).or_insert(0.0) += value(&item);
    }
    totals
}

/// Each group's share of the grand total. A zero or empty total yields zero
/// shares, never a division fault.
pub fn share_of_total<K>(totals: &BTreeMap<K, f64>) -> BTreeMap<K, f64>
where
    K: Ord + Clone,
{
    let grand_total: f64 = totals.values().sum();
    totals
        .iter()
        .map(|(key, value)| {
            let share = if grand_total > 0.0 {
                value / grand_total
            } else {
                0.0
            };
            (key.clone(), share)
        })
        .collect()
}

/// Viewing hours per actor.
pub fn hours_by_actor(sessions: &[Session]) -> BTreeMap<ActorId, f64> {
    sum_by(
        sessions.iter(),
        |s| s.actor.clone(),
        |s| s.duration_hours(),
    )
}

/// Every output table of one full analysis run, in the stable record shapes
/// the presentation side consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub session_count: usize,
    pub rejected_rows: usize,
    pub overlap_flags: BTreeMap<SessionId, bool>,
    pub actor_overlap: Vec<ActorOverlap>,
    pub pair_overlap: Vec<PairOverlap>,
    pub clock_distribution: Vec<ClockBucket>,
    pub hours_by_actor: BTreeMap<ActorId, f64>,
    pub hours_share: BTreeMap<ActorId, f64>,
    pub interest_graph: InterestGraph,
    pub shared_titles: Vec<SharedTitleStat>,
}

impl Report {
    /// Run the full pipeline over a loaded store. An empty store produces an
    /// empty but fully-typed report.
    pub fn build(store: &SessionStore, config: &GraphConfig) -> Self {
        let sessions = store.sessions();
        let flags = compute_overlap_flags(sessions);
        let actor_overlap = aggregate_by_actor(sessions, &flags);
        let pair_overlap = pairwise_overlap_matrix(sessions, &store.actors());
        let clock_distribution = time_of_day_overlap_distribution(sessions, &flags);
        let hours = hours_by_actor(sessions);
        let hours_share = share_of_total(&hours);

        let titles_by_actor = store.titles_by_actor();
        let interest_graph = build_graph(&titles_by_actor, config);
        let shared_titles = shared_title_table(&titles_by_actor);

        Self {
            session_count: sessions.len(),
            rejected_rows: store.rejected(),
            overlap_flags: flags.into_iter().collect(),
            actor_overlap,
            pair_overlap,
            clock_distribution,
            hours_by_actor: hours,
            hours_share,
            interest_graph,
            shared_titles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRow;

    fn row(profile: &str, title: &str, start: &str, duration: i64) -> RawRow {
        RawRow {
            profile_name: profile.into(),
            title: title.into(),
            start_time: start.into(),
            duration: Some(duration),
            supplemental_video_type: None,
        }
    }

    #[test]
    fn sum_by_groups_values() {
        let items = vec![("a", 1.0), ("b", 2.0), ("a", 3.0)];
        let totals = sum_by(items, |(k, _)| k.to_string(), |(_, v)| *v);
        assert_eq!(totals["a"], 4.0);
        assert_eq!(totals["b"], 2.0);
    }

    #[test]
    fn share_of_total_sums_to_one() {
        let mut totals = BTreeMap::new();
        totals.insert("a", 1.0);
        totals.insert("b", 3.0);
        let shares = share_of_total(&totals);
        assert!((shares["a"] - 0.25).abs() < 1e-9);
        assert!((shares["b"] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        let mut totals = BTreeMap::new();
        totals.insert("a", 0.0);
        let shares = share_of_total(&totals);
        assert_eq!(shares["a"], 0.0);
    }

    #[test]
    fn report_over_real_rows_populates_every_table() {
        let store = SessionStore::load(vec![
            row("Alice", "Dark", "2024-03-01 20:00:00", 3600),
            row("Bob", "Dark", "2024-03-01 20:30:00", 3600),
            row("Bob", "The Expanse", "2024-03-02 22:00:00", 1800),
        ]);
        let report = Report::build(&store, &GraphConfig::default());

        assert_eq!(report.session_count, 3);
        assert_eq!(report.overlap_flags.len(), 3);
        assert_eq!(report.overlap_flags.values().filter(|f| **f).count(), 2);
        assert_eq!(report.actor_overlap.len(), 2);
        assert_eq!(report.pair_overlap.len(), 4);
        assert_eq!(report.clock_distribution.len(), 2);
        assert!((report.hours_by_actor["Bob"] - 1.5).abs() < 1e-9);
        assert_eq!(report.shared_titles.len(), 4);
        // Dark is shared, so the graph has both titles and the one edge Bob
        // contributes.
        assert_eq!(report.interest_graph.titles().len(), 2);
        assert_eq!(report.interest_graph.edges.len(), 1);
    }

    #[test]
    fn empty_store_builds_empty_but_typed_report() {
        let store = SessionStore::load(Vec::new());
        let report = Report::build(&store, &GraphConfig::default());
        assert_eq!(report.session_count, 0);
        assert!(report.overlap_flags.is_empty());
        assert!(report.actor_overlap.is_empty());
        assert!(report.pair_overlap.is_empty());
        assert!(report.clock_distribution.is_empty());
        assert!(report.interest_graph.nodes.is_empty());
        assert!(report.shared_titles.is_empty());
    }

    #[test]
    fn report_serializes_to_json() {
        let store = SessionStore::load(vec![row("Alice", "Dark", "2024-03-01 20:00:00", 3600)]);
        let report = Report::build(&store, &GraphConfig::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"sessionCount\":1"));
        assert!(json.contains("interestGraph"));
    }
}
