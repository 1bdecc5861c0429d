//! Bearer-token session state for the Waypost client platform.
//!
//! Provides:
//! - [`AuthToken`] — Opaque bearer token (redacted `Display`)
//! - [`SessionState`] — Signed-out / signed-in / revoked
//! - [`Session`] — Cheaply clonable handle holding the current state
//!
//! Every API call reads its token from a [`Session`] instead of ad-hoc
//! storage, and a 401 from any call revokes the session here. That makes the
//! "any 401 anywhere forces a global sign-out" policy a single enforcement
//! point: subscribers (a CLI loop, a UI shell) observe [`SessionState::Revoked`]
//! and route the user to sign-in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod session;
mod token;

pub use session::{Session, SessionState};
pub use token::AuthToken;
