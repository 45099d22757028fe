//! Concurrence and shared-interest analytics over a personal
//! streaming-activity log.
//!
//! The ingestion side hands over cleaned rows (profile, title, start
//! timestamp, duration); this crate normalizes them into sessions and
//! derives the two analyses the presentation side renders: per-session /
//! per-actor / per-pair temporal concurrence, and the title co-occurrence
//! graph with its exact shared-title companion table.

pub mod concurrence;
pub mod error;
pub mod graph;
pub mod models;
pub mod report;
pub mod store;
pub mod utils;

pub use error::AnalysisError;
pub use graph::GraphConfig;
pub use models::{
    ActorId, ActorOverlap, ClockBucket, InterestEdge, InterestGraph, InterestNode, PairOverlap,
    RawRow, Session, SessionId, SharedTitleStat, TitleId, TitlePair,
};
pub use report::Report;
pub use store::SessionStore;
