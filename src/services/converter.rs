use crate::models::ConvertedAudio;

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum ConvertErrorKind {
    #[error("Converter service returned {0}")]
    Status(u16),
    #[error("Converter did not return downloadUrl")]
    NoDownloadUrl,
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Converted audio with a guaranteed non-empty download url.
#[derive(Debug)]
pub struct Converted {
    pub download_url: String,
    pub title: Option<String>,
    pub size: Option<Value>,
}

#[instrument(skip_all, fields(%api_url))]
pub async fn convert_to_audio(client: &Client, api_url: &Url, video_url: &str, timeout: Duration) -> Result<Converted, ConvertErrorKind> {
    let response = client
        .post(api_url.as_str())
        .json(&json!({ "url": video_url }))
        .timeout(timeout)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConvertErrorKind::Status(status.as_u16()));
    }

    let ConvertedAudio { download_url, title, size } = serde_json::from_str(&response.text().await?)?;
    let download_url = download_url
        .filter(|download_url| !download_url.is_empty())
        .ok_or(ConvertErrorKind::NoDownloadUrl)?;
    debug!("Converted");

    Ok(Converted {
        download_url,
        title: title
            .as_ref()
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
            .map(ToOwned::to_owned),
        size,
    })
}
