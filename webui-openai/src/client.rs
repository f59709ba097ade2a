//! Proxy API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

const JSON_MIME: &str = "application/json";

/// How an endpoint treats the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthPolicy {
    /// Send `Authorization` only when the token is non-empty.
    Optional,
    /// Always send `Authorization`, even as a bare `Bearer `.
    Required,
}

impl AuthPolicy {
    /// The `Authorization` header value for `token`, if one should be sent.
    pub(crate) fn header_value(self, token: &str) -> Option<String> {
        match self {
            Self::Optional if token.is_empty() => None,
            Self::Optional | Self::Required => Some(format!("Bearer {token}")),
        }
    }
}

/// Client for the OpenAI-compatible proxy endpoints.
///
/// Every method issues exactly one HTTP request. The client holds no
/// per-call state; cloning it shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) http: Client,
}

impl OpenAIClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {e}")))?;

        Self::with_http_client(config, http)
    }

    /// Create a client that reuses an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL does not parse.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL {:?}: {e}", config.base_url)))?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`OpenAIClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL on the configured backend.
    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Build a request carrying the JSON headers and, per `auth`, the bearer token.
    pub(crate) fn request(
        &self,
        method: Method,
        url: &str,
        token: &str,
        auth: AuthPolicy,
    ) -> RequestBuilder {
        let authorization = auth.header_value(token);
        debug!(%method, url, auth = authorization.is_some(), "Building proxy request");

        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME);

        if let Some(value) = authorization {
            req = req.header(AUTHORIZATION, value);
        }

        req
    }

    /// Send a request and log the response status.
    pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Received proxy response"
        );
        Ok(response)
    }

    /// Read the whole body and parse it as JSON, ignoring the status code.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
