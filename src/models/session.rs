//! Session data model: the normalized viewing record every analysis runs on.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ActorId = String;
pub type TitleId = String;
pub type SessionId = String;

/// A single viewing session. The interval is the half-open range
/// `[start, start + duration_secs)`; `duration_secs` is never negative, so
/// `end() >= start` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub actor: ActorId,
    pub title: TitleId,
    pub start: DateTime<Utc>,
    pub duration_secs: i64,
}

impl Session {
    /// Build a session with a fresh id. Negative durations clamp to zero so
    /// no negative interval can exist downstream.
    pub fn new(actor: ActorId, title: TitleId, start: DateTime<Utc>, duration_secs: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            actor,
            title,
            start,
            duration_secs: duration_secs.max(0),
        }
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::seconds(self.duration_secs)
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs)
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_secs as f64 / 3600.0
    }

    /// Strict interval intersection: `s1 < e2 && s2 < e1`. Zero-length and
    /// boundary-touching intervals never overlap anything.
    pub fn overlaps(&self, other: &Session) -> bool {
        if self.duration_secs == 0 || other.duration_secs == 0 {
            return false;
        }
        self.start < other.end() && other.start < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start_secs: i64, duration_secs: i64) -> Session {
        Session::new(
            "Alice".into(),
            "The Expanse".into(),
            DateTime::from_timestamp(start_secs, 0).unwrap(),
            duration_secs,
        )
    }

    #[test]
    fn end_is_start_plus_duration() {
        let s = session(100, 60);
        assert_eq!(s.end().timestamp(), 160);
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let s = session(100, -30);
        assert_eq!(s.duration_secs, 0);
        assert_eq!(s.end(), s.start);
    }

    #[test]
    fn strict_overlap_rule() {
        // Plain intersection
        assert!(session(0, 100).overlaps(&session(50, 100)));
        // Boundary touch is not an overlap
        assert!(!session(0, 100).overlaps(&session(100, 100)));
        // Disjoint
        assert!(!session(0, 100).overlaps(&session(200, 100)));
    }

    #[test]
    fn zero_length_interval_overlaps_nothing() {
        let zero = session(50, 0);
        let containing = session(0, 100);
        assert!(!zero.overlaps(&containing));
        assert!(!containing.overlaps(&zero));
        assert!(!zero.overlaps(&session(50, 0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = session(0, 100);
        let b = session(50, 100);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}
