//! Session extractors: pull the `X-Token` header and resolve it
//! through the session gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use depot_core::error::AppError;
use depot_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the opaque session token.
const TOKEN_HEADER: &str = "x-token";

fn token_from(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
}

/// The resolved user of an authenticated request.
///
/// Rejects the request with an authentication failure when the header is
/// absent, empty, or maps to no live session.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            token_from(parts).ok_or_else(|| AppError::authentication("Unauthorized"))?;
        let user_id = state.session_gate.resolve(token).await?;
        Ok(AuthUser(user_id))
    }
}

/// The possibly-anonymous viewer of a retrieval request.
///
/// A missing or invalid token yields `None` instead of a rejection; the
/// retrieval path escalates to a denial only when the target record's
/// visibility check fails.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuthUser(pub Option<UserId>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let viewer = state.session_gate.resolve_optional(token_from(parts)).await?;
        Ok(MaybeAuthUser(viewer))
    }
}
