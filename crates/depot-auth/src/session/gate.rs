//! Session gate over the session store.

use std::sync::Arc;

use depot_cache::keys;
use depot_core::error::AppError;
use depot_core::result::AppResult;
use depot_core::traits::cache::CacheProvider;
use depot_core::types::UserId;

/// Resolves opaque session tokens to user identities.
///
/// Sessions are created elsewhere; the gate only consults the store.
/// Every authenticated path resolves a user before touching the metadata
/// repository. Store transport failures propagate as errors; a token that
/// simply maps to no live session is an authentication failure (strict
/// mode) or anonymity (tolerant mode).
#[derive(Debug, Clone)]
pub struct SessionGate {
    store: Arc<dyn CacheProvider>,
}

impl SessionGate {
    /// Create a new session gate over the given store.
    pub fn new(store: Arc<dyn CacheProvider>) -> Self {
        Self { store }
    }

    /// Resolve a token to a user identity or fail with an
    /// authentication error.
    pub async fn resolve(&self, token: &str) -> AppResult<UserId> {
        if token.is_empty() {
            return Err(AppError::authentication("Unauthorized"));
        }

        let value = self.store.get(&keys::auth_token(token)).await?;
        value
            .and_then(|raw| raw.parse::<UserId>().ok())
            .ok_or_else(|| AppError::authentication("Unauthorized"))
    }

    /// Resolve a token if one is present and valid, treating everything
    /// else as anonymous.
    ///
    /// Used by the retrieval path, which tolerates anonymous callers and
    /// only escalates to a denial when the target record's visibility
    /// check fails.
    pub async fn resolve_optional(&self, token: Option<&str>) -> AppResult<Option<UserId>> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let value = self.store.get(&keys::auth_token(token)).await?;
        Ok(value.and_then(|raw| raw.parse::<UserId>().ok()))
    }
}
