use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::catalog::{CatalogStore, Category};
use crate::error::{AppError, Result};

use super::store::QueueStateStore;
use super::types::{HistoryRecord, LeaveStatus, QueueEntry};

/// Decides whether a poll moves the user one step forward.
///
/// Injectable so tests can force or forbid movement.
pub trait AdvanceSampler: Send + Sync {
    fn should_advance(&self) -> bool;
}

/// Production sampler: advance with a fixed probability per poll.
pub struct RandomSampler {
    probability: f64,
}

impl RandomSampler {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl AdvanceSampler for RandomSampler {
    fn should_advance(&self) -> bool {
        rand::rng().random_bool(self.probability)
    }
}

/// Business logic for join / leave / position-update / history.
///
/// The engine owns the queue state store and reads the catalog at join time;
/// it never writes back to the catalog (joins are not visible to other
/// users' view of a place).
pub struct QueueEngine {
    store: QueueStateStore,
    catalog: Arc<CatalogStore>,
    sampler: Box<dyn AdvanceSampler>,
}

impl QueueEngine {
    pub fn new(catalog: Arc<CatalogStore>, sampler: Box<dyn AdvanceSampler>) -> Self {
        Self {
            store: QueueStateStore::new(),
            catalog,
            sampler,
        }
    }

    /// Join a place's queue. The joining user is modeled as the last arrival,
    /// so position is one past the baseline occupancy.
    ///
    /// An unknown category yields `PlaceNotFound` on this path, same as an
    /// unknown id. Joining while already queued overwrites the previous entry
    /// without a history record.
    pub fn join(&self, phone: &str, place_id: &str, category: &str) -> Result<QueueEntry> {
        let category = Category::parse(category).ok_or(AppError::PlaceNotFound)?;
        let place = self
            .catalog
            .lookup(category, place_id)
            .ok_or(AppError::PlaceNotFound)?;

        let entry = QueueEntry {
            place_name: place.name.clone(),
            place_id: place.id.clone(),
            category,
            position: place.queue_size + 1,
            total_in_queue: place.queue_size + 1,
            joined_at: Utc::now(),
            estimated_wait: place.wait_time,
        };

        self.store.with_state(phone, |state| {
            state.current_queue = Some(entry.clone());
        });

        tracing::info!(
            phone = %phone,
            place_id = %entry.place_id,
            position = entry.position,
            "Joined queue"
        );

        Ok(entry)
    }

    /// Current queue entry, if any. Pure read.
    pub fn current(&self, phone: &str) -> Option<QueueEntry> {
        self.store
            .with_state(phone, |state| state.current_queue.clone())
    }

    /// Leave the current queue. A no-op when not queued; otherwise the entry
    /// is snapshotted into history and cleared.
    pub fn leave(&self, phone: &str) {
        self.store.with_state(phone, |state| {
            if let Some(entry) = state.current_queue.take() {
                tracing::info!(phone = %phone, place_id = %entry.place_id, "Left queue");
                state.history.push(HistoryRecord {
                    entry,
                    left_at: Utc::now(),
                    status: LeaveStatus::Left,
                });
            }
        });
    }

    /// One poll tick: advance the user one step with the sampler's blessing.
    /// Position never drops below 1 and never increases.
    pub fn update_position(&self, phone: &str) -> Option<QueueEntry> {
        self.store.with_state(phone, |state| {
            if let Some(entry) = state.current_queue.as_mut() {
                if entry.position > 1 && self.sampler.should_advance() {
                    entry.position -= 1;
                }
            }
            state.current_queue.clone()
        })
    }

    /// Queue history in append order; empty for never-seen phones.
    pub fn history(&self, phone: &str) -> Vec<HistoryRecord> {
        self.store.with_state(phone, |state| state.history.clone())
    }

    #[cfg(test)]
    fn state_snapshot(&self, phone: &str) -> (Option<QueueEntry>, usize) {
        self.store
            .with_state(phone, |state| (state.current_queue.clone(), state.history.len()))
    }
}
