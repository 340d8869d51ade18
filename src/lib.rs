// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod session;

// Domain layer (business logic)
pub mod catalog;
pub mod queue;
pub mod registry;

// Application layer
pub mod api;
pub mod server;
