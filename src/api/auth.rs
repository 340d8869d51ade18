use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::UserProfile;
use crate::server::AppState;
use crate::session::{clear_session_cookie, session_cookie, MaybeSessionToken};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// `POST /api/register` - create a profile and log the user in.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let phone = req.phone.trim();
    let name = req.name.trim();

    state.registry.register(phone, name)?;
    let token = state.sessions.create(phone);

    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(RegisterResponse {
            success: true,
            message: "Registration successful".to_string(),
        }),
    ))
}

/// `POST /api/login` - log an existing user in.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let phone = req.phone.trim();

    let user = state.registry.login(phone)?;
    let token = state.sessions.create(phone);

    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(LoginResponse {
            success: true,
            user,
        }),
    ))
}

/// `POST /api/logout` - revoke the session, if any. Always succeeds.
pub async fn logout(
    State(state): State<AppState>,
    MaybeSessionToken(token): MaybeSessionToken,
) -> impl IntoResponse {
    if let Some(token) = token {
        state.sessions.revoke(&token);
    }

    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(SuccessResponse { success: true }),
    )
}

/// `GET /api/check-auth` - report the current session's profile, if any.
pub async fn check_auth(
    State(state): State<AppState>,
    MaybeSessionToken(token): MaybeSessionToken,
) -> Json<AuthStatusResponse> {
    let user = token
        .and_then(|t| state.sessions.resolve(&t))
        .and_then(|phone| state.registry.get(&phone));

    Json(AuthStatusResponse {
        authenticated: user.is_some(),
        user,
    })
}
