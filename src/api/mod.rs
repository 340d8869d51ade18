//! API layer - HTTP endpoint handlers organized by domain.

mod auth;
mod catalog;
mod health;
mod queue;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use auth::{check_auth, login, logout, register};
pub use catalog::{list_banks, list_categories, list_government, list_restaurants, places_by_category};
pub use health::health;
pub use queue::{current_queue, history, join_queue, leave_queue, update_position};
pub use routes::api_routes;
