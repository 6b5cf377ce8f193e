//! HTTP client for the backend API.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use scholar_core::error::{ApiError, Error, InvalidInputError, StorageError, TransportError};
use scholar_core::{ApiUrl, BearerToken, Result};

use crate::endpoints::ErrorPayload;

/// Transport timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn transport(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}

/// HTTP client bound to one API base URL.
///
/// The client holds no credentials. Callers pass the bearer token for each
/// request, so no request ever picks up a token it was not given.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a client with the default timeout.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_timeout(api, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("scholar/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport)?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Start a request to an API path, optionally signed with `token`.
    ///
    /// Fails if the token cannot be carried in a header.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&BearerToken>,
    ) -> Result<RequestBuilder> {
        sign(self.client.request(method, self.api.endpoint(path)), token)
    }

    /// GET a JSON resource.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_json<R>(&self, path: &str, token: Option<&BearerToken>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(path, "GET");
        self.send(self.request(Method::GET, path, token)?).await
    }

    /// POST a JSON body and decode the JSON response.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn post_json<B, R>(
        &self,
        path: &str,
        body: &B,
        token: Option<&BearerToken>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(path, "POST");
        self.send(self.request(Method::POST, path, token)?.json(body))
            .await
    }

    /// POST with no body, ignoring whatever the response contains.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn post_empty(&self, path: &str, token: Option<&BearerToken>) -> Result<()> {
        debug!(path, "POST (no body)");

        let response = self
            .request(Method::POST, path, token)?
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Error::Api(parse_error_response(response).await))
        }
    }

    /// Send a prepared request and decode its JSON response.
    pub async fn send<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let response = request.send().await.map_err(transport)?;
        handle_response(response).await
    }

    /// Fetch an absolute URL and write the body to `dest`.
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str, dest: &Path) -> Result<PathBuf> {
        let response = self.client.get(url).send().await.map_err(transport)?;

        if !response.status().is_success() {
            return Err(Error::Api(parse_error_response(response).await));
        }

        let bytes = response.bytes().await.map_err(transport)?;
        tokio::fs::write(dest, &bytes).await.map_err(|e| StorageError::Io {
            path: dest.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(bytes = bytes.len(), "Downloaded");
        Ok(dest.to_path_buf())
    }
}

/// Decode a success body, or turn an error status into an [`ApiError`].
async fn handle_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    trace!(status = %status, "response");

    if status.is_success() {
        response.json::<R>().await.map_err(transport)
    } else {
        Err(Error::Api(parse_error_response(response).await))
    }
}

fn sign(request: RequestBuilder, token: Option<&BearerToken>) -> Result<RequestBuilder> {
    let Some(token) = token else {
        return Ok(request);
    };

    let mut value = HeaderValue::from_str(&token.header_value()).map_err(|e| {
        InvalidInputError::Header {
            reason: e.to_string(),
        }
    })?;
    value.set_sensitive(true);
    Ok(request.header(AUTHORIZATION, value))
}

async fn parse_error_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();

    match response.json::<ErrorPayload>().await {
        Ok(payload) => ApiError::new(status, payload.into_message()),
        Err(_) => ApiError::new(status, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://learn.example.com").unwrap();
        let client = HttpClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn unsigned_request_has_no_authorization() {
        let client = HttpClient::new(ApiUrl::new("https://learn.example.com").unwrap()).unwrap();
        let request = client
            .request(Method::GET, "/user/profile", None)
            .unwrap()
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.url().as_str(), "https://learn.example.com/user/profile");
    }

    #[test]
    fn signed_request_carries_bearer() {
        let client = HttpClient::new(ApiUrl::new("https://learn.example.com").unwrap()).unwrap();
        let token = BearerToken::new("T1");
        let request = client
            .request(Method::GET, "/user/profile", Some(&token))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer T1");
    }

    #[test]
    fn token_that_cannot_be_a_header_is_rejected() {
        let client = HttpClient::new(ApiUrl::new("https://learn.example.com").unwrap()).unwrap();
        let token = BearerToken::new("T1\nX-Injected: yes");

        let err = client
            .request(Method::GET, "/user/profile", Some(&token))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Header { .. })
        ));
    }
}
