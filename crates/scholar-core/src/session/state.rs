//! Session state and its derived status.

use crate::tokens::BearerToken;
use crate::types::User;

/// Authentication state held by a [`SessionStore`](super::SessionStore).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<BearerToken>,
    pub is_authenticated: bool,
    /// True while an auth-affecting network operation is outstanding.
    pub is_loading: bool,
}

/// Coarse position of a session in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// A login, registration or validation is in flight.
    Pending,
    /// A token was accepted and a profile is present.
    Authenticated,
    /// A token was restored but has not been validated yet.
    Unknown,
    /// No usable session.
    Anonymous,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        if self.is_loading {
            SessionStatus::Pending
        } else if self.is_authenticated {
            SessionStatus::Authenticated
        } else if self.token.is_some() {
            SessionStatus::Unknown
        } else {
            SessionStatus::Anonymous
        }
    }

    /// `Authorization` header value for the current token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(BearerToken::header_value)
    }

    /// Drop every credential-bearing field at once.
    pub(crate) fn clear_credentials(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }
}
