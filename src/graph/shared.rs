//! Exact shared-title statistics, independent of graph sampling.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ActorId, SharedTitleStat, TitleId};

/// For every ordered actor pair `(x, y)`: how many of x's titles are also in
/// y's set, and what fraction of x's set that is. Computed directly from the
/// per-actor title sets, so the numbers stay exact no matter what the graph's
/// pair cap did. The self pair is the 100% "exclusive" baseline.
pub fn shared_title_table(
    titles_by_actor: &BTreeMap<ActorId, BTreeSet<TitleId>>,
) -> Vec<SharedTitleStat> {
    let mut table = Vec::with_capacity(titles_by_actor.len() * titles_by_actor.len());

    for (actor_a, titles_a) in titles_by_actor {
        for (actor_b, titles_b) in titles_by_actor {
            let exclusive = actor_a == actor_b;
            let shared_count = if exclusive {
                titles_a.len()
            } else {
                titles_a.intersection(titles_b).count()
            };
            let pct = if titles_a.is_empty() {
                0.0
            } else {
                shared_count as f64 / titles_a.len() as f64
            };
            table.push(SharedTitleStat {
                actor_a: actor_a.clone(),
                actor_b: actor_b.clone(),
                shared_count,
                pct,
                exclusive,
            });
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(pairs: &[(&str, &[&str])]) -> BTreeMap<ActorId, BTreeSet<TitleId>> {
        pairs
            .iter()
            .map(|(actor, titles)| {
                (
                    actor.to_string(),
                    titles.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    fn entry<'a>(
        table: &'a [SharedTitleStat],
        a: &str,
        b: &str,
    ) -> &'a SharedTitleStat {
        table
            .iter()
            .find(|s| s.actor_a == a && s.actor_b == b)
            .unwrap()
    }

    #[test]
    fn worked_example() {
        // X viewed {a, b}, Y viewed {b, c}.
        let table = shared_title_table(&titles(&[("X", &["a", "b"]), ("Y", &["b", "c"])]));
        let xy = entry(&table, "X", "Y");
        assert_eq!(xy.shared_count, 1);
        assert!((xy.pct - 0.5).abs() < 1e-9);
        assert!(!xy.exclusive);
    }

    #[test]
    fn self_pair_is_always_full_and_exclusive() {
        let table = shared_title_table(&titles(&[("X", &["a", "b"]), ("Y", &["c"])]));
        for actor in ["X", "Y"] {
            let own = entry(&table, actor, actor);
            assert!((own.pct - 1.0).abs() < 1e-9);
            assert!(own.exclusive);
        }
    }

    #[test]
    fn ordered_pairs_can_be_asymmetric() {
        // X has 4 titles, one shared; Y has 1 title, also the shared one.
        let table =
            shared_title_table(&titles(&[("X", &["a", "b", "c", "d"]), ("Y", &["d"])]));
        assert!((entry(&table, "X", "Y").pct - 0.25).abs() < 1e-9);
        assert!((entry(&table, "Y", "X").pct - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_viewing_set_yields_zero_pct() {
        let table = shared_title_table(&titles(&[("X", &[]), ("Y", &["a"])]));
        assert_eq!(entry(&table, "X", "Y").pct, 0.0);
        assert_eq!(entry(&table, "X", "X").pct, 0.0);
    }

    #[test]
    fn table_covers_all_ordered_pairs() {
        let table = shared_title_table(&titles(&[
            ("X", &["a"]),
            ("Y", &["a"]),
            ("Z", &["b"]),
        ]));
        assert_eq!(table.len(), 9);
    }
}
