//! Read-only view of a session store.

use tokio::sync::watch;

use super::SessionState;

/// A cheap, cloneable observer of a [`SessionStore`](super::SessionStore).
///
/// Handles always see the latest state, so anything that signs requests
/// through a handle picks up a new token as soon as the store records it.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<SessionState>,
}

impl SessionHandle {
    pub(crate) fn new(rx: watch::Receiver<SessionState>) -> Self {
        Self { rx }
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// `Authorization` header value for the current token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.rx.borrow().authorization()
    }

    /// Wait for the next mutation. Returns `false` once the store is disposed.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
