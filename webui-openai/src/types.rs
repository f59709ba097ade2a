//! Wire types for the upstream management endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /urls/update`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateUrlsForm<'a> {
    pub urls: &'a [String],
}

/// Body of `POST /keys/update`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UpdateKeysForm<'a> {
    pub keys: &'a [String],
}

/// Response of the `/urls` endpoints.
///
/// Only the URL list is read; other fields the server adds are ignored.
/// An absent or `null` field (error bodies) stays `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct UrlsResponse {
    #[serde(rename = "OPENAI_API_BASE_URLS")]
    pub urls: Option<Vec<String>>,
}

/// Response of the `/keys` endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct KeysResponse {
    #[serde(rename = "OPENAI_API_KEYS")]
    pub keys: Option<Vec<String>>,
}
