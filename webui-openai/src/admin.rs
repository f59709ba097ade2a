//! Backend configuration and upstream management endpoints.
//!
//! These endpoints accept an optional bearer token: an empty token sends no
//! `Authorization` header at all.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::{AuthPolicy, OpenAIClient};
use crate::error::Result;
use crate::types::{KeysResponse, UpdateKeysForm, UpdateUrlsForm, UrlsResponse};

impl OpenAIClient {
    /// Fetch the backend's OpenAI configuration (`GET /config`).
    ///
    /// The body is returned as-is, whatever the status code.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn get_config(&self, token: &str) -> Result<Value> {
        let url = self.url("/config");
        let response = Self::send(self.request(Method::GET, &url, token, AuthPolicy::Optional)).await?;
        Self::read_json(response).await
    }

    /// Replace the backend's OpenAI configuration (`POST /config/update`).
    ///
    /// `config` is forwarded unmodified; the server's reply is returned.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn update_config<C>(&self, token: &str, config: &C) -> Result<Value>
    where
        C: Serialize + ?Sized,
    {
        let url = self.url("/config/update");
        let request = self
            .request(Method::POST, &url, token, AuthPolicy::Optional)
            .json(config);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }

    /// List the configured upstream base URLs (`GET /urls`).
    ///
    /// `None` when the reply carries no `OPENAI_API_BASE_URLS` (or it is
    /// `null`), as with an error body; `Some(vec![])` means no upstreams.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn get_urls(&self, token: &str) -> Result<Option<Vec<String>>> {
        let url = self.url("/urls");
        let response = Self::send(self.request(Method::GET, &url, token, AuthPolicy::Optional)).await?;
        let parsed: UrlsResponse = Self::read_json(response).await?;
        Ok(parsed.urls)
    }

    /// Replace the upstream base URLs (`POST /urls/update`).
    ///
    /// Returns the list as stored by the server, which may differ from `urls`
    /// after server-side normalization.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn update_urls(&self, token: &str, urls: &[String]) -> Result<Option<Vec<String>>> {
        let url = self.url("/urls/update");
        let request = self
            .request(Method::POST, &url, token, AuthPolicy::Optional)
            .json(&UpdateUrlsForm { urls });
        let response = Self::send(request).await?;
        let parsed: UrlsResponse = Self::read_json(response).await?;
        Ok(parsed.urls)
    }

    /// List the upstream API keys (`GET /keys`), parallel to [`get_urls`](Self::get_urls).
    ///
    /// `None` when the reply carries no `OPENAI_API_KEYS` (or it is `null`).
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn get_keys(&self, token: &str) -> Result<Option<Vec<String>>> {
        let url = self.url("/keys");
        let response = Self::send(self.request(Method::GET, &url, token, AuthPolicy::Optional)).await?;
        let parsed: KeysResponse = Self::read_json(response).await?;
        Ok(parsed.keys)
    }

    /// Replace the upstream API keys (`POST /keys/update`).
    ///
    /// Returns the list as stored by the server.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn update_keys(&self, token: &str, keys: &[String]) -> Result<Option<Vec<String>>> {
        let url = self.url("/keys/update");
        let request = self
            .request(Method::POST, &url, token, AuthPolicy::Optional)
            .json(&UpdateKeysForm { keys });
        let response = Self::send(request).await?;
        let parsed: KeysResponse = Self::read_json(response).await?;
        Ok(parsed.keys)
    }

    /// Check that the backend answers `GET /config` with a 2xx status.
    ///
    /// The body is never read.
    ///
    /// # Errors
    ///
    /// Fails only on transport errors; any HTTP status yields `Ok`.
    pub async fn verify_connection(&self, token: &str) -> Result<bool> {
        let url = self.url("/config");
        let response = Self::send(self.request(Method::GET, &url, token, AuthPolicy::Optional)).await?;
        Ok(response.status().is_success())
    }
}
