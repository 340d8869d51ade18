use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::Settings;
use crate::queue::{AdvanceSampler, QueueEngine, RandomSampler};
use crate::registry::UserRegistry;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub catalog: Arc<CatalogStore>,
    pub registry: Arc<UserRegistry>,
    pub sessions: Arc<SessionStore>,
    pub engine: Arc<QueueEngine>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let sampler = Box::new(RandomSampler::new(settings.queue.advance_probability));
        Self::with_sampler(settings, sampler)
    }

    /// Build state with a specific advance sampler. Lets tests substitute a
    /// deterministic source for the queue simulation.
    pub fn with_sampler(settings: Settings, sampler: Box<dyn AdvanceSampler>) -> Self {
        let catalog = Arc::new(CatalogStore::new());
        let registry = Arc::new(UserRegistry::new(settings.validation.clone()));
        let sessions = Arc::new(SessionStore::new());
        let engine = Arc::new(QueueEngine::new(catalog.clone(), sampler));

        Self {
            settings: Arc::new(settings),
            catalog,
            registry,
            sessions,
            engine,
        }
    }
}
