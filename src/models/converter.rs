use serde::Deserialize;
use serde_json::Value;

/// Response of the external converter service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedAudio {
    #[serde(default)]
    pub download_url: Option<String>,
    /// Kept only when it is a non-empty string.
    #[serde(default)]
    pub title: Option<Value>,
    /// Converters report size either as text or as a number of bytes.
    #[serde(default)]
    pub size: Option<Value>,
}
