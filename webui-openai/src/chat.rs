//! Chat completions through the backend.
//!
//! Both operations always send `Authorization`, even for an empty token.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cancel::AbortController;
use crate::client::{AuthPolicy, OpenAIClient};
use crate::error::{Error, Result};
use crate::response::CompletionResponse;

impl OpenAIClient {
    /// Start a chat completion without reading its body.
    ///
    /// Returns as soon as the response headers arrive, together with a fresh
    /// [`AbortController`] that stops any further body reads. The response is
    /// `None` if the request could not be constructed (for example, a token
    /// that is not a valid header value or a body that fails to serialize).
    ///
    /// `body` is forwarded unmodified; set `"stream": true` in it and consume
    /// [`CompletionResponse::events`] for incremental output.
    ///
    /// # Errors
    ///
    /// Fails on transport errors while sending.
    pub async fn chat_completion<B>(
        &self,
        token: &str,
        body: &B,
    ) -> Result<(Option<CompletionResponse>, AbortController)>
    where
        B: Serialize + ?Sized,
    {
        let controller = AbortController::new();
        let response = self.chat_completion_with(token, body, &controller).await?;
        Ok((response, controller))
    }

    /// Like [`chat_completion`](Self::chat_completion), but bound to a
    /// caller-owned controller, so the request can also be aborted while it
    /// is still being sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Aborted`] if `controller` is aborted before the
    /// response headers arrive, or a transport error.
    pub async fn chat_completion_with<B>(
        &self,
        token: &str,
        body: &B,
        controller: &AbortController,
    ) -> Result<Option<CompletionResponse>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url("/chat/completions");
        let request = match self
            .request(Method::POST, &url, token, AuthPolicy::Required)
            .json(body)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to build chat completion request: {e}");
                return Ok(None);
            }
        };

        if controller.is_aborted() {
            return Err(Error::Aborted);
        }

        let response = tokio::select! {
            biased;
            () = controller.aborted() => return Err(Error::Aborted),
            response = self.http.execute(request) => response?,
        };

        debug!(
            status = response.status().as_u16(),
            "Chat completion response started"
        );

        Ok(Some(CompletionResponse::new(response, controller.clone())))
    }

    /// Run a chat completion and return the parsed body.
    ///
    /// The body is returned whatever the status code, so backend error
    /// payloads come back as `Ok`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the body is not JSON.
    pub async fn generate_chat_completion<B>(&self, token: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url("/chat/completions");
        let request = self
            .request(Method::POST, &url, token, AuthPolicy::Required)
            .json(body);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }
}
