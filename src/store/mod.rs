//! Session store: normalizes raw export rows into `Session` records and
//! exposes the actor/title views the analyses consume.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use log::{debug, warn};

use crate::error::AnalysisError;
use crate::models::{ActorId, RawRow, Session, TitleId};

/// In-memory collection of normalized sessions.
///
/// Rows with an unparsable timestamp or a negative duration are dropped with
/// a logged warning; a missing duration clamps to zero. Supplemental content
/// (trailers, hooks) is filtered out before it can reach any analysis. A bad
/// row is never fatal to the batch.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
    rejected: usize,
    supplemental: usize,
}

impl SessionStore {
    pub fn load<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut sessions = Vec::new();
        let mut rejected = 0;
        let mut supplemental = 0;

        for (idx, row) in rows.into_iter().enumerate() {
            if row.is_supplemental() {
                debug!(
                    "row {}: skipping supplemental content {:?}",
                    idx + 1,
                    row.title
                );
                supplemental += 1;
                continue;
            }

            match parse_row(idx + 1, &row) {
                Ok(session) => sessions.push(session),
                Err(err) => {
                    warn!("skipping row: {err}");
                    rejected += 1;
                }
            }
        }

        Self {
            sessions,
            rejected,
            supplemental,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Rows dropped as malformed during the last load.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Rows filtered out as supplemental content during the last load.
    pub fn supplemental_filtered(&self) -> usize {
        self.supplemental
    }

    pub fn check_non_empty(&self) -> Result<(), AnalysisError> {
        if self.sessions.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        Ok(())
    }

    pub fn actors(&self) -> BTreeSet<ActorId> {
        self.sessions.iter().map(|s| s.actor.clone()).collect()
    }

    /// Each actor's viewed-title set. Ordered collections so downstream
    /// iteration (and therefore seeded sampling) is deterministic.
    pub fn titles_by_actor(&self) -> BTreeMap<ActorId, BTreeSet<TitleId>> {
        let mut map: BTreeMap<ActorId, BTreeSet<TitleId>> = BTreeMap::new();
        for session in &self.sessions {
            map.entry(session.actor.clone())
                .or_default()
                .insert(session.title.clone());
        }
        map
    }
}

fn parse_row(line: usize, row: &RawRow) -> Result<Session, AnalysisError> {
    let start = parse_start_time(&row.start_time).ok_or_else(|| AnalysisError::MalformedRow {
        line,
        reason: format!("unparsable start_time {:?}", row.start_time),
    })?;

    let duration_secs = row.duration.unwrap_or(0);
    if duration_secs < 0 {
        return Err(AnalysisError::MalformedRow {
            line,
            reason: format!("negative duration {duration_secs}"),
        });
    }

    Ok(Session::new(
        row.profile_name.clone(),
        row.title.clone(),
        start,
        duration_secs,
    ))
}

/// Accepts RFC 3339 as well as the export's naive `YYYY-MM-DD HH:MM:SS`
/// form (interpreted as UTC).
fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
