pub mod graph;
pub mod overlap;
pub mod row;
pub mod session;

pub use graph::{InterestEdge, InterestGraph, InterestNode, SharedTitleStat, TitlePair};
pub use overlap::{ActorOverlap, ClockBucket, PairOverlap};
pub use row::RawRow;
pub use session::{ActorId, Session, SessionId, TitleId};
