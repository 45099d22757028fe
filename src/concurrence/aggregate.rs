//! Per-actor and per-pair concurrence aggregates.

use std::collections::{BTreeSet, HashMap};

use crate::concurrence::algorithm::compute_overlap_flags;
use crate::models::{ActorId, ActorOverlap, PairOverlap, Session, SessionId};
use crate::report::sum_by;

/// Aggregate overlap flags into per-actor concurrent/total hours.
///
/// Every actor present in `sessions` appears in the result, concurrent or
/// not. `pct` is defined as 0 when the actor has no viewing time at all.
pub fn aggregate_by_actor(
    sessions: &[Session],
    flags: &HashMap<SessionId, bool>,
) -> Vec<ActorOverlap> {
    let totals = sum_by(
        sessions.iter(),
        |s| s.actor.clone(),
        |s| s.duration_hours(),
    );
    let concurrent = sum_by(
        sessions
            .iter()
            .filter(|s| flags.get(&s.id).copied().unwrap_or(false)),
        |s| s.actor.clone(),
        |s| s.duration_hours(),
    );

    totals
        .into_iter()
        .map(|(actor, total_hours)| {
            let concurrent_hours = concurrent.get(&actor).copied().unwrap_or(0.0);
            let pct = if total_hours > 0.0 {
                concurrent_hours / total_hours
            } else {
                0.0
            };
            ActorOverlap {
                actor,
                concurrent_hours,
                total_hours,
                pct,
            }
        })
        .collect()
}

/// Concurrence of `actor_a` against `actor_b` alone.
///
/// Flags are recomputed on the `{actor_a, actor_b}` sub-universe rather than
/// reused from the global run: a session can overlap some third actor
/// without overlapping this particular one. The self pair is fixed at 0.
pub fn pairwise_overlap(sessions: &[Session], actor_a: &str, actor_b: &str) -> PairOverlap {
    if actor_a == actor_b {
        return PairOverlap {
            actor_a: actor_a.into(),
            actor_b: actor_b.into(),
            pct: 0.0,
        };
    }

    let universe: Vec<Session> = sessions
        .iter()
        .filter(|s| s.actor == actor_a || s.actor == actor_b)
        .cloned()
        .collect();
    let flags = compute_overlap_flags(&universe);

    let mut concurrent_hours = 0.0;
    let mut total_hours = 0.0;
    for session in universe.iter().filter(|s| s.actor == actor_a) {
        let hours = session.duration_hours();
        total_hours += hours;
        if flags.get(&session.id).copied().unwrap_or(false) {
            concurrent_hours += hours;
        }
    }

    let pct = if total_hours > 0.0 {
        concurrent_hours / total_hours
    } else {
        0.0
    };

    PairOverlap {
        actor_a: actor_a.into(),
        actor_b: actor_b.into(),
        pct,
    }
}

/// The full ordered-pair table, diagonal fixed at 0, suitable for a chord
/// diagram.
pub fn pairwise_overlap_matrix(
    sessions: &[Session],
    actors: &BTreeSet<ActorId>,
) -> Vec<PairOverlap> {
    let mut table = Vec::with_capacity(actors.len() * actors.len());
    for a in actors {
        for b in actors {
            table.push(pairwise_overlap(sessions, a, b));
        }
    }
    table
}
