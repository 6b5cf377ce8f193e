//! Backend authentication API trait.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::types::User;
use crate::{BearerToken, Credentials, Result};

/// What the backend hands back on a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    /// The bearer credential for subsequent requests.
    pub token: BearerToken,
    /// The authenticated user's profile.
    pub user: User,
}

/// The backend endpoints the session store consumes.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant>;

    /// Create an account and sign it in.
    async fn register(&self, user_data: &Map<String, Value>) -> Result<AuthGrant>;

    /// Tell the backend the session is over.
    async fn logout(&self, token: &BearerToken) -> Result<()>;

    /// Fetch the profile of the token's owner.
    async fn profile(&self, token: &BearerToken) -> Result<User>;
}
