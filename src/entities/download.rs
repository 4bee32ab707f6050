use serde::Serialize;
use serde_json::Value;

pub const SIZE_AUTO: &str = "auto";
pub const SIZE_UNKNOWN: &str = "unknown";

/// Body of every successful `/api/download` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub title: String,
    pub thumbnail: String,
    /// No real size is computed; either a placeholder or what the converter reports.
    pub size: Value,
    pub download_url: String,
    pub note: String,
}
