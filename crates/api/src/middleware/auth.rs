//! Bearer-token authentication middleware.
//!
//! `require_auth` validates the `Authorization: Bearer` header and stores an
//! [`AuthUser`] in request extensions for handlers. `require_admin` is layered
//! on top of it and checks the role claim.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use shared::jwt::Role;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated caller identity, extracted from a verified token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub employee_id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Middleware that requires a valid bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            return ApiError::Unauthorized("Missing bearer token".into()).into_response();
        }
    };

    let claims = match state.jwt.verify(&token) {
        Ok(claims) => claims,
        Err(err) => return ApiError::from(err).into_response(),
    };

    let employee_id = match claims.sub.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return ApiError::Unauthorized("Invalid token subject".into()).into_response();
        }
    };

    req.extensions_mut().insert(AuthUser {
        employee_id,
        role: claims.role,
    });
    next.run(req).await
}

/// Middleware for admin-only routes. Runs after `require_auth`, so the
/// identity is already in extensions.
pub async fn require_admin(
    State(_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match req.extensions().get::<AuthUser>() {
        Some(user) if user.is_admin() => next.run(req).await,
        Some(_) => ApiError::Forbidden("Admin access required".into()).into_response(),
        None => ApiError::Unauthorized("Missing bearer token".into()).into_response(),
    }
}

fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
