use super::path::get_first_text;

use serde_json::Value;

const THUMBNAIL_FIELDS: &[&str] = &[
    "cover_url",
    "thumbnail",
    "thumbnail_url",
    "data.cover_url",
    "itemInfo.itemStruct.video.cover",
    "item.video.cover",
];

/// Empty string when the payload has no known thumbnail field.
pub fn extract_thumbnail(payload: &Value) -> String {
    get_first_text(payload, THUMBNAIL_FIELDS).unwrap_or_default()
}
