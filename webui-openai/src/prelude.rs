//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use webui_openai::prelude::*;
//! ```

pub use crate::audio::SpeechRequest;
pub use crate::cancel::AbortController;
pub use crate::client::OpenAIClient;
pub use crate::config::ClientConfig;
pub use crate::error::{Error, Result};
pub use crate::response::CompletionResponse;
pub use crate::stream::{StreamEvent, parse_sse_events};
