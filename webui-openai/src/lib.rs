//! Typed client for the OpenAI-compatible proxy endpoints of a chat web UI
//! backend.
//!
//! The backend manages a list of upstream OpenAI-compatible servers (base
//! URL + API key pairs) and proxies model listing, chat completions and
//! speech synthesis to them. [`OpenAIClient`] maps each backend endpoint to
//! one async method that sends exactly one request:
//!
//! - configuration: [`get_config`](OpenAIClient::get_config),
//!   [`update_config`](OpenAIClient::update_config),
//!   [`verify_connection`](OpenAIClient::verify_connection)
//! - upstreams: [`get_urls`](OpenAIClient::get_urls),
//!   [`update_urls`](OpenAIClient::update_urls),
//!   [`get_keys`](OpenAIClient::get_keys),
//!   [`update_keys`](OpenAIClient::update_keys)
//! - models: [`list_models`](OpenAIClient::list_models),
//!   [`get_models_direct`](OpenAIClient::get_models_direct)
//! - chat: [`chat_completion`](OpenAIClient::chat_completion),
//!   [`generate_chat_completion`](OpenAIClient::generate_chat_completion)
//! - speech: [`synthesize_speech`](OpenAIClient::synthesize_speech)
//!
//! Nothing is retried, cached or validated; failures surface directly.

mod admin;
pub mod audio;
pub mod cancel;
mod chat;
pub mod client;
pub mod config;
pub mod error;
mod models;
pub mod prelude;
pub mod response;
pub mod stream;
mod types;

pub use audio::SpeechRequest;
pub use cancel::AbortController;
pub use client::OpenAIClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use response::CompletionResponse;
pub use stream::{SseDecoder, StreamEvent};
