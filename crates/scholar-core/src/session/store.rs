//! The authentication session store.

use serde_json::{Map, Value};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::traits::{AuthApi, AuthGrant, SessionStorage};
use crate::types::User;
use crate::{Credentials, Error};

use super::{PersistedSession, SessionHandle, SessionState, SessionStatus};

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// A failed login or registration, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    /// Human-readable reason, taken from the backend when it sent one.
    pub message: String,
}

impl AuthFailure {
    fn from_error(err: &Error, fallback: &str) -> Self {
        Self {
            message: err.api_message().unwrap_or(fallback).to_string(),
        }
    }
}

/// Owns the client's authentication state.
///
/// A store is built once at startup with [`SessionStore::init`], which
/// restores whatever the storage slot holds, and torn down with
/// [`SessionStore::dispose`]. Every mutation goes through the operations
/// below; after each one the [`PersistedSession`] projection is written back
/// to storage, except on logout, where the slot is erased instead.
///
/// Network failures never escape as errors: login and registration return
/// an [`AuthFailure`], validation failures tear the session down, and logout
/// always succeeds locally.
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
    state: watch::Sender<SessionState>,
}

impl<A, S> SessionStore<A, S>
where
    A: AuthApi,
    S: SessionStorage,
{
    /// Create the store, restoring any session left in `storage`.
    pub fn init(api: A, storage: S) -> Self {
        let restored = match storage.load() {
            Ok(Some(persisted)) => {
                debug!("Restored persisted session");
                persisted.restore()
            }
            Ok(None) => SessionState::default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable persisted session");
                SessionState::default()
            }
        };

        let (state, _) = watch::channel(restored);
        Self {
            api,
            storage,
            state,
        }
    }

    /// End the store's lifetime. Outstanding handles observe the close.
    pub fn dispose(self) {
        debug!("Disposing session store");
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    /// `Authorization` header value for the current token, if any.
    pub fn authorization(&self) -> Option<String> {
        self.state.borrow().authorization()
    }

    /// Observe every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// A read-only handle for request signing and route guards.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle::new(self.state.subscribe())
    }

    /// The backend this store talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Authenticate with credentials.
    ///
    /// On failure only the loading flag is cleared; whatever session was
    /// in place before the call is left as it was.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthFailure> {
        info!("Logging in");
        self.update(|s| s.is_loading = true);

        match self.api.login(credentials).await {
            Ok(grant) => Ok(self.establish(grant)),
            Err(e) => {
                warn!(error = %e, "Login rejected");
                self.update(|s| s.is_loading = false);
                Err(AuthFailure::from_error(&e, LOGIN_FAILED))
            }
        }
    }

    /// Create an account and sign into it. Same contract as [`login`](Self::login).
    #[instrument(skip(self, user_data))]
    pub async fn register(&self, user_data: &Map<String, Value>) -> Result<User, AuthFailure> {
        info!("Registering account");
        self.update(|s| s.is_loading = true);

        match self.api.register(user_data).await {
            Ok(grant) => Ok(self.establish(grant)),
            Err(e) => {
                warn!(error = %e, "Registration rejected");
                self.update(|s| s.is_loading = false);
                Err(AuthFailure::from_error(&e, REGISTRATION_FAILED))
            }
        }
    }

    /// End the session.
    ///
    /// The backend is notified when there is a token to revoke, but a failed
    /// notification does not stop the local teardown.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        let token = self.state.borrow().token.clone();

        if let Some(token) = token {
            if let Err(e) = self.api.logout(&token).await {
                warn!(error = %e, "Logout notification failed");
            }
        }

        self.state.send_modify(|s| {
            s.clear_credentials();
            s.is_loading = false;
        });

        if let Err(e) = self.storage.remove() {
            warn!(error = %e, "Failed to erase persisted session, overwriting it");
            self.persist();
        }

        info!("Logged out");
    }

    /// Re-validate the current token by fetching the profile.
    ///
    /// Returns whether the session is authenticated afterwards. Any failure,
    /// whether a rejected token or an unreachable backend, tears the session
    /// down completely.
    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> bool {
        let token = self.state.borrow().token.clone();

        let Some(token) = token else {
            debug!("No token to validate");
            self.update(|s| {
                s.is_loading = false;
                s.is_authenticated = false;
            });
            return false;
        };

        self.update(|s| s.is_loading = true);

        match self.api.profile(&token).await {
            Ok(user) => {
                debug!("Session is valid");
                self.update(move |s| {
                    s.user = Some(user);
                    s.is_authenticated = true;
                    s.is_loading = false;
                });
                true
            }
            Err(e) => {
                info!(error = %e, "Session invalid, clearing");
                self.update(|s| {
                    s.clear_credentials();
                    s.is_loading = false;
                });
                false
            }
        }
    }

    /// Token rotation is not supported by the backend; re-validation stands in.
    pub async fn refresh_token(&self) -> bool {
        self.check_auth().await
    }

    /// Shallow-merge fields into the current user. No-op when signed out.
    pub fn update_user(&self, partial: Map<String, Value>) {
        self.update(move |s| {
            if let Some(user) = s.user.as_mut() {
                user.merge(partial);
            }
        });
    }

    fn establish(&self, grant: AuthGrant) -> User {
        let AuthGrant { token, user } = grant;
        let returned = user.clone();

        self.update(move |s| {
            s.token = Some(token);
            s.user = Some(user);
            s.is_authenticated = true;
            s.is_loading = false;
        });

        info!("Session established");
        returned
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        self.state.send_modify(mutate);
        self.persist();
    }

    fn persist(&self) {
        let projection = PersistedSession::project(&self.state.borrow());
        if let Err(e) = self.storage.save(&projection) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}
