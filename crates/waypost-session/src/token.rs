//! Opaque bearer token.

use std::fmt;

/// A bearer token as issued by the backend at sign-in.
///
/// The token is opaque to the client; it is stored, attached to requests,
/// and cleared, never inspected. `Display` redacts all but the last four
/// characters so tokens don't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    /// The raw token value, for the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        write!(f, "••••{tail}")
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let token = AuthToken::new("abc123xyz");
        assert_eq!(token.as_str(), "abc123xyz");
    }

    #[test]
    fn test_display_redacts() {
        let token = AuthToken::new("secret-token-1234");
        let shown = token.to_string();
        assert_eq!(shown, "••••1234");
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn test_debug_redacts() {
        let token = AuthToken::new("secret-token-1234");
        let shown = format!("{token:?}");
        assert!(!shown.contains("secret"));
    }
}
