use serde::{Deserialize, Serialize};

use crate::models::session::ActorId;

/// Per-actor concurrence aggregate: how much of the actor's viewing time was
/// concurrent with any other actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorOverlap {
    pub actor: ActorId,
    pub concurrent_hours: f64,
    pub total_hours: f64,
    /// `concurrent_hours / total_hours`, defined as 0 for idle actors.
    pub pct: f64,
}

/// Ordered-pair concurrence stat, recomputed on the `{actor_a, actor_b}`
/// sub-universe. The self pair is fixed at 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOverlap {
    pub actor_a: ActorId,
    pub actor_b: ActorId,
    pub pct: f64,
}

/// One half-hour time-of-day bucket of overlapping session starts.
///
/// Buckets are right-labeled: `minutes` is the minute-of-day of the slot's
/// *end*, so 570 (09:30) covers starts in [09:00, 09:30). The midnight wrap
/// labels as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockBucket {
    pub minutes: u32,
    pub count: u64,
    pub pct: f64,
}
