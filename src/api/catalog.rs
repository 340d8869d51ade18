use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::{Category, CategoryInfo, Place};
use crate::error::{AppError, Result};
use crate::server::AppState;

/// `GET /api/categories`
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryInfo>> {
    Json(state.catalog.categories().to_vec())
}

/// `GET /api/restaurants`
pub async fn list_restaurants(State(state): State<AppState>) -> Json<Vec<Place>> {
    Json(state.catalog.places(Category::Restaurants).to_vec())
}

/// `GET /api/banks`
pub async fn list_banks(State(state): State<AppState>) -> Json<Vec<Place>> {
    Json(state.catalog.places(Category::Banks).to_vec())
}

/// `GET /api/government`
pub async fn list_government(State(state): State<AppState>) -> Json<Vec<Place>> {
    Json(state.catalog.places(Category::Government).to_vec())
}

/// `GET /api/places/{category}` - 404 for an unknown category.
pub async fn places_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Place>>> {
    let category = Category::parse(&category).ok_or(AppError::CategoryNotFound)?;
    Ok(Json(state.catalog.places(category).to_vec()))
}
