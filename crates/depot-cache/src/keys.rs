//! Cache key builders for all Depot cache entries.
//!
//! Centralising key construction prevents typos and makes it easy to
//! find every key the application uses.

/// Prefix applied to all Depot cache keys.
const PREFIX: &str = "depot";

/// Cache key for an authenticated session token.
///
/// The value stored under this key is the session's user id. Sessions are
/// written by the (external) authentication service and only read here.
pub fn auth_token(token: &str) -> String {
    format!("{PREFIX}:auth:{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_key() {
        assert_eq!(auth_token("abc123"), "depot:auth:abc123");
    }
}
