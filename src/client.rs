//! `polyglot send`: talk to a running server the way the browser app does.

use anyhow::{Context, Result, bail};

use crate::bridge::{RelayRequest, Reply};

/// POST `{"input": ...}` to `url` and decode the reply.
pub async fn send(url: &str, input: &str) -> Result<Reply> {
    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .json(&RelayRequest {
            input: input.to_string(),
        })
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("server returned {status}: {body}");
    }

    response
        .json::<Reply>()
        .await
        .context("server reply was not a relay response")
}
