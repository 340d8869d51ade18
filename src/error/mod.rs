use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Name must be at least {0} characters")]
    InvalidName(usize),

    #[error("Phone number already registered")]
    PhoneAlreadyExists,

    #[error("Phone number not found. Please register first.")]
    PhoneNotFound,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Place not found")]
    PlaceNotFound,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidPhone | AppError::InvalidName(_) | AppError::PhoneAlreadyExists => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::PhoneNotFound | AppError::CategoryNotFound | AppError::PlaceNotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        // Always log the error server-side
        tracing::warn!(
            status = %status.as_u16(),
            message = %message,
            "API error"
        );

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
