//! Request signing from the live session.

use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use tracing::trace;

use scholar_core::{BearerToken, Result, SessionHandle};

use crate::client::HttpClient;

/// An HTTP client that signs each request with the session's current token.
///
/// The token is read when the request is built, not when the client is
/// created, so a client made before login starts sending credentials as soon
/// as the login lands, and stops after logout.
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
    client: HttpClient,
    session: SessionHandle,
}

impl AuthorizedClient {
    pub fn new(client: HttpClient, session: SessionHandle) -> Self {
        Self { client, session }
    }

    fn current_token(&self) -> Option<BearerToken> {
        let token = self.session.snapshot().token;
        trace!(signed = token.is_some(), "signing request");
        token
    }

    /// Start a request to an API path, signed if a session is active.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.current_token();
        self.client.request(method, path, token.as_ref())
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let token = self.current_token();
        self.client.get_json(path, token.as_ref()).await
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let token = self.current_token();
        self.client.post_json(path, body, token.as_ref()).await
    }
}
