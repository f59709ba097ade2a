//! Inspect the backend's upstream configuration.
//!
//! ```bash
//! export WEBUI_OPENAI_BASE_URL=http://localhost:8080/openai
//! export WEBUI_TOKEN=...
//! cargo run --example upstreams
//! ```

#![allow(clippy::print_stdout)]

use webui_openai::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter("webui_openai=debug")
        .init();

    let client = OpenAIClient::from_env()?;
    let token = std::env::var("WEBUI_TOKEN").unwrap_or_default();

    if !client.verify_connection(&token).await? {
        println!("Backend at {} is not reachable", client.base_url());
        return Ok(());
    }

    let Some(urls) = client.get_urls(&token).await? else {
        println!("Backend did not return an upstream list (is the token an admin token?)");
        return Ok(());
    };
    let keys = client.get_keys(&token).await?.unwrap_or_default();

    for (idx, url) in urls.iter().enumerate() {
        let has_key = keys.get(idx).is_some_and(|k| !k.is_empty());
        let models = client.list_models(&token, Some(idx)).await?;
        let count = models["data"].as_array().map_or(0, Vec::len);
        println!("[{idx}] {url} (key: {has_key}, models: {count})");
    }

    Ok(())
}
