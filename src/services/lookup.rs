use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum LookupErrorKind {
    #[error("Lookup API error {0}")]
    Status(u16),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Resolves a post url into the lookup service's raw, schema-less payload.
#[instrument(skip_all, fields(%api_url))]
pub async fn lookup(client: &Client, api_url: &Url, url: &str, timeout: Duration) -> Result<Value, LookupErrorKind> {
    let response = client
        .get(api_url.as_str())
        .query(&[("url", url)])
        .timeout(timeout)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupErrorKind::Status(status.as_u16()));
    }

    let payload = serde_json::from_str(&response.text().await?)?;
    debug!("Got lookup payload");
    Ok(payload)
}
