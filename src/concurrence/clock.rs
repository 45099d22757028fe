//! Time-of-day distribution of overlapping sessions.

use std::collections::{BTreeMap, HashMap};

use chrono::Timelike;

use crate::models::{ClockBucket, Session, SessionId};

const MINUTES_PER_DAY: u32 = 24 * 60;
const BUCKET_MINUTES: u32 = 30;

/// Project the start of every flagged session onto the 24-hour clock and
/// count per half-hour bucket, with percentages over the flagged population.
///
/// The date component is discarded. Buckets are right-labeled: a start at
/// `t` lands in the slot labeled by the end of its enclosing half hour
/// (09:10 → 09:30, 09:30 → 10:00), with the label wrapping to 0 at
/// midnight. No flagged sessions means an empty distribution.
pub fn time_of_day_overlap_distribution(
    sessions: &[Session],
    flags: &HashMap<SessionId, bool>,
) -> Vec<ClockBucket> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    let mut flagged_total: u64 = 0;

    for session in sessions {
        if !flags.get(&session.id).copied().unwrap_or(false) {
            continue;
        }
        let minute_of_day = session.start.hour() * 60 + session.start.minute();
        let label = (minute_of_day + BUCKET_MINUTES) / BUCKET_MINUTES * BUCKET_MINUTES
            % MINUTES_PER_DAY;
        *counts.entry(label).or_insert(0) += 1;
        flagged_total += 1;
    }

    counts
        .into_iter()
        .map(|(minutes, count)| ClockBucket {
            minutes,
            count,
            pct: count as f64 / flagged_total as f64,
        })
        .collect()
}
