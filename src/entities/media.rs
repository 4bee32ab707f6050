use serde_json::Value;

/// Best-effort result of scraping a lookup payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMedia {
    pub video_url: String,
    pub thumbnail: String,
}

/// Lookup payload together with what was scraped from it.
///
/// The payload is kept because later steps (title, hd rescan) read it again.
#[derive(Debug, Clone)]
pub struct LookupMedia {
    pub payload: Value,
    pub media: ExtractedMedia,
}

impl LookupMedia {
    pub const fn new(payload: Value, media: ExtractedMedia) -> Self {
        Self { payload, media }
    }

    /// Payload `title` if it is a non-empty string.
    pub fn title(&self) -> Option<&str> {
        self.payload.get("title").and_then(Value::as_str).filter(|title| !title.is_empty())
    }
}
