//! In-flight chat completion responses.

use async_stream::try_stream;
use bytes::{Bytes, BytesMut};
use futures::Stream;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cancel::AbortController;
use crate::error::{Error, Result};
use crate::stream::{SseDecoder, StreamEvent};

/// Response of a cancellable chat completion whose body has not been read.
///
/// Status and headers are available immediately. The body is read lazily,
/// and every read races the [`AbortController`] returned alongside it. The
/// first read after an abort drops the underlying connection.
#[derive(Debug)]
pub struct CompletionResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Response>,
    controller: AbortController,
}

impl CompletionResponse {
    pub(crate) fn new(inner: Response, controller: AbortController) -> Self {
        Self {
            status: inner.status(),
            headers: inner.headers().clone(),
            body: Some(inner),
            controller,
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The cancellation handle bound to this response.
    #[must_use]
    pub const fn controller(&self) -> &AbortController {
        &self.controller
    }

    /// Read the next chunk of the body; `None` once the body is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Aborted`] once the controller has been aborted, or a
    /// transport error if the connection fails mid-body.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>> {
        if self.controller.is_aborted() {
            self.release();
            return Err(Error::Aborted);
        }
        let Some(body) = self.body.as_mut() else {
            return Err(Error::Aborted);
        };

        let chunk = tokio::select! {
            biased;
            () = self.controller.aborted() => None,
            chunk = body.chunk() => Some(chunk),
        };

        match chunk {
            Some(chunk) => Ok(chunk?),
            None => {
                self.release();
                Err(Error::Aborted)
            }
        }
    }

    /// Drop the connection of an aborted response.
    fn release(&mut self) {
        if self.body.take().is_some() {
            debug!("Dropped aborted response body");
        }
    }

    /// Collect the whole body.
    ///
    /// # Errors
    ///
    /// See [`chunk`](Self::chunk).
    pub async fn bytes(mut self) -> Result<Bytes> {
        let mut body = BytesMut::new();
        loop {
            let Some(chunk) = self.chunk().await? else {
                break;
            };
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }

    /// Collect the whole body as text, replacing invalid UTF-8.
    ///
    /// # Errors
    ///
    /// See [`chunk`](Self::chunk).
    pub async fn text(self) -> Result<String> {
        let body = self.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Collect the whole body and parse it as JSON.
    ///
    /// # Errors
    ///
    /// See [`chunk`](Self::chunk); also fails if the body is not valid JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// The body as a stream of raw chunks.
    ///
    /// The stream yields [`Error::Aborted`] and ends once the controller is
    /// aborted.
    pub fn bytes_stream(self) -> impl Stream<Item = Result<Bytes>> + Send {
        let mut response = self;
        try_stream! {
            loop {
                let Some(chunk) = response.chunk().await? else {
                    break;
                };
                yield chunk;
            }
        }
    }

    /// The body decoded as server-sent events.
    ///
    /// Use this for requests sent with `"stream": true`.
    pub fn events(self) -> impl Stream<Item = Result<StreamEvent>> + Send {
        let mut response = self;
        try_stream! {
            let mut decoder = SseDecoder::new();
            loop {
                let Some(chunk) = response.chunk().await? else {
                    break;
                };
                for event in decoder.feed(&chunk) {
                    yield event;
                }
            }
            if let Some(event) = decoder.finish() {
                yield event;
            }
        }
    }
}
