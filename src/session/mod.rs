//! Cookie-based session layer.
//!
//! A session is an opaque random token mapped to a phone number. The token
//! travels in an HttpOnly cookie; the phone number never leaves the server
//! as a credential. Sessions live for the process lifetime or until logout.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::AppError;
use crate::server::AppState;

pub const SESSION_COOKIE: &str = "qe_session";

/// Token → phone mapping.
pub struct SessionStore {
    sessions: DashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Mint a new session token for a phone number.
    pub fn create(&self, phone: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), phone.to_string());
        token
    }

    pub fn resolve(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|p| p.clone())
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the session token from the Cookie header, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Set-Cookie value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Authenticated request identity. Rejects with 401 when the request carries
/// no valid session cookie.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub phone: String,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or(AppError::Unauthenticated)?;
        let phone = state
            .sessions
            .resolve(&token)
            .ok_or(AppError::Unauthenticated)?;
        Ok(SessionUser { phone })
    }
}

/// Raw session token, present or not. Used by endpoints that must not
/// reject unauthenticated requests (logout, check-auth).
#[derive(Debug, Clone)]
pub struct MaybeSessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeSessionToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSessionToken(token_from_headers(&parts.headers)))
    }
}
