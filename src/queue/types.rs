use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Category;

/// A user's live spot in a queue.
///
/// Invariant: `1 <= position <= total_in_queue`. `position` only ever
/// decreases after the entry is created.
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntry {
    pub place_name: String,
    pub place_id: String,
    pub category: Category,
    pub position: u32,
    pub total_in_queue: u32,
    pub joined_at: DateTime<Utc>,
    pub estimated_wait: u32,
}

/// How a queue entry ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeaveStatus {
    Left,
}

/// Immutable snapshot of a queue entry the user left.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    #[serde(flatten)]
    pub entry: QueueEntry,
    pub left_at: DateTime<Utc>,
    pub status: LeaveStatus,
}

/// Per-user queue state, lazily created on first access.
#[derive(Debug, Default)]
pub struct UserQueueState {
    pub current_queue: Option<QueueEntry>,
    pub history: Vec<HistoryRecord>,
}
