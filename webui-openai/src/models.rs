//! Model listing.

use reqwest::Method;
use serde_json::Value;

use crate::client::{AuthPolicy, OpenAIClient};
use crate::error::{Error, Result};

impl OpenAIClient {
    /// List models through the backend (`GET /models` or `GET /models/{index}`).
    ///
    /// With `url_idx` set, only the upstream at that position in the
    /// URL/key lists is queried; otherwise the backend aggregates all
    /// upstreams.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn list_models(&self, token: &str, url_idx: Option<usize>) -> Result<Value> {
        let url = match url_idx {
            Some(idx) => self.url(&format!("/models/{idx}")),
            None => self.url("/models"),
        };
        let response = Self::send(self.request(Method::GET, &url, token, AuthPolicy::Optional)).await?;
        Self::read_json(response).await
    }

    /// List models straight from an arbitrary OpenAI-compatible endpoint.
    ///
    /// Bypasses the backend: `base_url` and `key` are used as given, and the
    /// key is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] with message `"Failed to fetch models"` on a
    /// non-success status, and fails on transport or JSON errors.
    pub async fn get_models_direct(&self, base_url: &str, key: &str) -> Result<Value> {
        let url = format!("{}/models", base_url.trim_end_matches('/'));
        let response = Self::send(self.request(Method::GET, &url, key, AuthPolicy::Required)).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request(status.as_u16(), "Failed to fetch models"));
        }

        Self::read_json(response).await
    }
}
