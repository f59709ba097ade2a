//! Streaming chat through the backend, stopped after a few events.
//!
//! ```bash
//! export WEBUI_OPENAI_BASE_URL=http://localhost:8080/openai
//! export WEBUI_TOKEN=...
//! cargo run --example stream_chat
//! ```

#![allow(clippy::print_stdout)]

use futures::StreamExt;
use serde_json::json;
use std::io::{Write, stdout};
use webui_openai::prelude::*;

const MAX_EVENTS: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = OpenAIClient::from_env()?;
    let token = std::env::var("WEBUI_TOKEN").unwrap_or_default();

    let body = json!({
        "model": "gpt-4o-mini",
        "stream": true,
        "messages": [{ "role": "user", "content": "Write a haiku about Rust." }],
    });

    let (response, controller) = client.chat_completion(&token, &body).await?;
    let Some(response) = response else {
        println!("Request could not be constructed");
        return Ok(());
    };

    let mut events = Box::pin(response.events());
    let mut seen = 0;
    while let Some(event) = events.next().await {
        match event {
            Ok(StreamEvent::Done) | Err(Error::Aborted) => break,
            Ok(event) => {
                if let Some(text) = event.content_delta() {
                    print!("{text}");
                    stdout().flush()?;
                }
            }
            Err(e) => return Err(e.into()),
        }

        seen += 1;
        if seen == MAX_EVENTS {
            controller.abort();
        }
    }
    println!();

    Ok(())
}
