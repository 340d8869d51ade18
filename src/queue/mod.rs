//! Queue simulation core.
//!
//! Each user has at most one current queue entry plus an append-only history
//! of queues they left. Position advancement is poll-driven and stochastic;
//! nothing moves server-side between requests.

mod engine;
mod store;
mod types;

pub use engine::{AdvanceSampler, QueueEngine, RandomSampler};
pub use store::QueueStateStore;
pub use types::{HistoryRecord, LeaveStatus, QueueEntry, UserQueueState};
