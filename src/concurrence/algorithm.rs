//! Overlap-flag computation: for each session, whether its interval strictly
//! overlaps a session belonging to a different actor.
//!
//! Two implementations share one contract and must produce identical flags:
//! a naive all-pairs reference, and the sweep-line production path that keeps
//! multi-year exports (tens of thousands of sessions) at O(n log n).

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use crate::log_info;
use crate::models::{Session, SessionId};

const ENABLE_LOGS: bool = false;

/// O(n²) reference implementation: test every session against every session
/// of a different actor. Correct for all n; kept as the equivalence oracle
/// for the sweep line.
pub fn compute_overlap_flags_naive(sessions: &[Session]) -> HashMap<SessionId, bool> {
    let mut flags: HashMap<SessionId, bool> = sessions
        .iter()
        .map(|session| (session.id.clone(), false))
        .collect();

    for (i, a) in sessions.iter().enumerate() {
        for b in &sessions[i + 1..] {
            if a.actor != b.actor && a.overlaps(b) {
                flags.insert(a.id.clone(), true);
                flags.insert(b.id.clone(), true);
            }
        }
    }

    flags
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // Ends sort before starts at equal timestamps, so boundary-touching
    // intervals never count as overlapping.
    End = 0,
    Start = 1,
}

#[derive(Debug, Clone, Copy)]
struct Event {
    at: DateTime<Utc>,
    kind: EventKind,
    idx: usize,
}

/// Sweep-line production path.
///
/// Interval endpoints are sorted and scanned once while an active census is
/// maintained per actor. A session is flagged either at its own start (some
/// other actor is already active) or when a different actor's session starts
/// while it is active. Zero-length sessions are excluded up front: under the
/// strict rule they overlap nothing and nothing overlaps them.
pub fn compute_overlap_flags(sessions: &[Session]) -> HashMap<SessionId, bool> {
    let mut flags: HashMap<SessionId, bool> = sessions
        .iter()
        .map(|session| (session.id.clone(), false))
        .collect();

    let mut events = Vec::with_capacity(sessions.len() * 2);
    for (idx, session) in sessions.iter().enumerate() {
        if session.duration_secs == 0 {
            continue;
        }
        events.push(Event {
            at: session.start,
            kind: EventKind::Start,
            idx,
        });
        events.push(Event {
            at: session.end(),
            kind: EventKind::End,
            idx,
        });
    }
    events.sort_by(|a, b| {
        a.at.cmp(&b.at)
            .then(a.kind.cmp(&b.kind))
            .then(a.idx.cmp(&b.idx))
    });

    // Active census per actor, plus the subset of active sessions that have
    // not been flagged yet. Flagged sessions leave the unflagged index but
    // stay in the census until their end event.
    let mut active_total: usize = 0;
    let mut active_by_actor: HashMap<&str, usize> = HashMap::new();
    let mut unflagged: HashMap<&str, BTreeSet<usize>> = HashMap::new();

    for event in &events {
        let session = &sessions[event.idx];
        let actor = session.actor.as_str();

        match event.kind {
            EventKind::Start => {
                let own_active = active_by_actor.get(actor).copied().unwrap_or(0);
                if active_total > own_active {
                    // Something of another actor is live right now: this
                    // session overlaps, and so does every still-unflagged
                    // active session of the other actors.
                    flags.insert(session.id.clone(), true);
                    for (other_actor, pending) in unflagged.iter_mut() {
                        if *other_actor == actor {
                            continue;
                        }
                        for &pending_idx in pending.iter() {
                            flags.insert(sessions[pending_idx].id.clone(), true);
                        }
                        pending.clear();
                    }
                } else {
                    unflagged.entry(actor).or_default().insert(event.idx);
                }
                *active_by_actor.entry(actor).or_insert(0) += 1;
                active_total += 1;
            }
            EventKind::End => {
                if let Some(count) = active_by_actor.get_mut(actor) {
                    *count -= 1;
                }
                active_total -= 1;
                if let Some(pending) = unflagged.get_mut(actor) {
                    pending.remove(&event.idx);
                }
            }
        }
    }

    log_info!(
        "sweep processed {} events over {} sessions",
        events.len(),
        sessions.len()
    );

    flags
}
