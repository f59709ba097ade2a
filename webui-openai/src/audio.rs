//! Text-to-speech through the backend.

use bytes::Bytes;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{AuthPolicy, OpenAIClient};
use crate::error::{Error, Result};

/// Body of `POST /audio/speech`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// TTS model. Defaults to [`SpeechRequest::DEFAULT_MODEL`].
    pub model: String,
    /// Text to speak. Defaults to empty.
    pub input: String,
    /// Speaker voice. Defaults to [`SpeechRequest::DEFAULT_VOICE`].
    pub voice: String,
}

impl SpeechRequest {
    /// Default speaker.
    pub const DEFAULT_VOICE: &'static str = "alloy";
    /// Default TTS model.
    pub const DEFAULT_MODEL: &'static str = "tts-1";

    /// Create a request for `input` with the default voice and model.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Set the speaker voice.
    #[must_use]
    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Set the TTS model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for SpeechRequest {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_owned(),
            input: String::new(),
            voice: Self::DEFAULT_VOICE.to_owned(),
        }
    }
}

impl OpenAIClient {
    /// Synthesize speech and return the backend's JSON reply.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn synthesize_speech(&self, token: &str, request: &SpeechRequest) -> Result<Value> {
        let url = self.url("/audio/speech");
        let response = Self::send(
            self.request(Method::POST, &url, token, AuthPolicy::Required)
                .json(request),
        )
        .await?;
        Self::read_json(response).await
    }

    /// Synthesize speech and return the raw audio bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] on a non-success status, or a transport error.
    pub async fn synthesize_speech_audio(
        &self,
        token: &str,
        request: &SpeechRequest,
    ) -> Result<Bytes> {
        let url = self.url("/audio/speech");
        let response = Self::send(
            self.request(Method::POST, &url, token, AuthPolicy::Required)
                .json(request),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?)
    }
}
