//! HTTP implementation of the authentication API.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use scholar_core::traits::{AuthApi, AuthGrant};
use scholar_core::{BearerToken, Credentials, Result, User};

use crate::client::HttpClient;
use crate::endpoints::{Endpoints, GrantResponse};

/// The backend authentication API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: HttpClient,
    endpoints: Endpoints,
}

impl HttpAuthApi {
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoints(client, Endpoints::default())
    }

    pub fn with_endpoints(client: HttpClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn into_grant(response: GrantResponse) -> Result<AuthGrant> {
        Ok(AuthGrant {
            token: BearerToken::new(response.token),
            user: User::from_value(response.user)?,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant> {
        let response: GrantResponse = self
            .client
            .post_json(&self.endpoints.login, credentials, None)
            .await?;

        debug!("Login accepted");
        Self::into_grant(response)
    }

    #[instrument(skip(self, user_data))]
    async fn register(&self, user_data: &Map<String, Value>) -> Result<AuthGrant> {
        let response: GrantResponse = self
            .client
            .post_json(&self.endpoints.register, user_data, None)
            .await?;

        debug!("Registration accepted");
        Self::into_grant(response)
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: &BearerToken) -> Result<()> {
        self.client
            .post_empty(&self.endpoints.logout, Some(token))
            .await
    }

    #[instrument(skip(self, token))]
    async fn profile(&self, token: &BearerToken) -> Result<User> {
        let profile: Value = self
            .client
            .get_json(&self.endpoints.profile, Some(token))
            .await?;

        User::from_value(profile)
    }
}
