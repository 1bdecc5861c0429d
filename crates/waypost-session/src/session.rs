//! The session handle.

use std::sync::Arc;

use tokio::sync::watch;

use crate::token::AuthToken;

/// Current state of the user's session.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token is held; requests requiring auth fail locally.
    #[default]
    SignedOut,

    /// A token is held and attached to authenticated requests.
    SignedIn(AuthToken),

    /// The backend rejected the token (401); the token has been cleared
    /// and the user must sign in again.
    Revoked {
        /// Why the session was revoked, surfaced to the user.
        reason: String,
    },
}

impl SessionState {
    /// Returns `true` if a token is currently held.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    /// Returns `true` if the session was force-revoked by a 401.
    pub fn is_revoked(&self) -> bool {
        matches!(self, SessionState::Revoked { .. })
    }
}

/// Thread-safe handle to the session state.
///
/// Cheap to clone (Arc internals). State changes are broadcast to all
/// subscribers via a watch channel, so any component can react to a
/// forced sign-out regardless of which call triggered it.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    tx: watch::Sender<SessionState>,
}

impl Session {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::SignedOut);
        Self {
            inner: Arc::new(SessionInner { tx }),
        }
    }

    /// Creates a session that already holds a token.
    pub fn with_token(token: impl Into<AuthToken>) -> Self {
        let session = Self::new();
        session.sign_in(token);
        session
    }

    /// Stores a token and broadcasts the signed-in state.
    pub fn sign_in(&self, token: impl Into<AuthToken>) {
        let token = token.into();
        log::info!("Session signed in ({token})");
        self.inner.tx.send_replace(SessionState::SignedIn(token));
    }

    /// Clears the token on explicit user sign-out.
    pub fn sign_out(&self) {
        log::info!("Session signed out");
        self.inner.tx.send_replace(SessionState::SignedOut);
    }

    /// Force-revokes the session after a 401.
    ///
    /// The token is cleared immediately; subscribers observe
    /// [`SessionState::Revoked`] and must route the user to sign-in.
    /// This is the only place auth state is torn down on rejection.
    pub fn revoke(&self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("Session revoked: {reason}");
        self.inner.tx.send_replace(SessionState::Revoked { reason });
    }

    /// The current token, if signed in.
    pub fn token(&self) -> Option<AuthToken> {
        match &*self.inner.tx.borrow() {
            SessionState::SignedIn(token) => Some(token.clone()),
            _ => None,
        }
    }

    /// The current session state.
    pub fn state(&self) -> SessionState {
        self.inner.tx.borrow().clone()
    }

    /// Subscribe to session state changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.tx.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("state", &self.state()).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_signed_out() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::SignedOut);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_sign_in_stores_token() {
        let session = Session::new();
        session.sign_in("tok-123");
        assert!(session.state().is_signed_in());
        assert_eq!(session.token().unwrap().as_str(), "tok-123");
    }

    #[test]
    fn test_sign_out_clears_token() {
        let session = Session::with_token("tok-123");
        session.sign_out();
        assert!(session.token().is_none());
        assert_eq!(session.state(), SessionState::SignedOut);
    }

    #[test]
    fn test_revoke_clears_token_immediately() {
        let session = Session::with_token("tok-123");
        session.revoke("session expired");

        assert!(session.token().is_none());
        let state = session.state();
        assert!(state.is_revoked());
        let SessionState::Revoked { reason } = state else {
            unreachable!("Expected Revoked state");
        };
        assert_eq!(reason, "session expired");
    }

    #[test]
    fn test_clone_shares_state() {
        let session = Session::new();
        let other = session.clone();

        session.sign_in("tok-shared");
        assert_eq!(other.token().unwrap().as_str(), "tok-shared");

        other.revoke("expired");
        assert!(session.token().is_none());
    }

    #[test]
    fn test_subscriber_observes_revocation() {
        let session = Session::with_token("tok-123");
        let mut rx = session.subscribe();

        session.revoke("token rejected by backend");
        assert!(rx.borrow_and_update().is_revoked());
    }

    #[tokio::test]
    async fn test_subscriber_is_woken_on_revocation() {
        let session = Session::with_token("tok-123");
        let mut rx = session.subscribe();
        rx.borrow_and_update();

        let s = session.clone();
        tokio::spawn(async move {
            s.revoke("expired");
        });

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_revoked());
    }

    #[test]
    fn test_session_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
        assert_send_sync::<SessionState>();
    }
}
