use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::auth::{check_auth, login, logout, register};
use super::catalog::{
    list_banks, list_categories, list_government, list_restaurants, places_by_category,
};
use super::health::health;
use super::queue::{current_queue, history, join_queue, leave_queue, update_position};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                // Authentication
                .route("/register", post(register))
                .route("/login", post(login))
                .route("/logout", post(logout))
                .route("/check-auth", get(check_auth))
                // Catalog
                .route("/categories", get(list_categories))
                .route("/restaurants", get(list_restaurants))
                .route("/banks", get(list_banks))
                .route("/government", get(list_government))
                .route("/places/{category}", get(places_by_category))
                // Queue management
                .route("/join-queue", post(join_queue))
                .route("/current-queue", get(current_queue))
                .route("/leave-queue", post(leave_queue))
                .route("/update-position", post(update_position))
                .route("/history", get(history)),
        )
}
