use dashmap::DashMap;

use super::types::UserQueueState;

/// Per-phone queue state, keyed independently.
///
/// `DashMap` entry guards give each phone its own mutual-exclusion scope,
/// so concurrent polls for the same user cannot lose updates.
pub struct QueueStateStore {
    states: DashMap<String, UserQueueState>,
}

impl QueueStateStore {
    pub fn new() -> Self {
        Self {
            states: DashMap::new(),
        }
    }

    /// Run `f` with exclusive access to the user's state, creating an empty
    /// state on first access.
    pub fn with_state<R>(&self, phone: &str, f: impl FnOnce(&mut UserQueueState) -> R) -> R {
        let mut entry = self.states.entry(phone.to_string()).or_default();
        f(entry.value_mut())
    }
}

impl Default for QueueStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_creation() {
        let store = QueueStateStore::new();
        let (current, history_len) = store.with_state("5551234567", |state| {
            (state.current_queue.clone(), state.history.len())
        });
        assert!(current.is_none());
        assert_eq!(history_len, 0);
    }

    #[test]
    fn test_state_persists_across_accesses() {
        let store = QueueStateStore::new();
        store.with_state("5551234567", |state| {
            state.history.clear();
        });
        store.with_state("5551234567", |_| {});

        // Still exactly one state per phone, mutations visible
        let seen = store.with_state("5551234567", |state| state.history.len());
        assert_eq!(seen, 0);
    }
}
