//! Best-effort scraping of lookup payloads.
//!
//! Lookup services don't publish a schema and the shape changes between calls,
//! so instead of a strict parse a fixed list of heuristics is tried in order.

mod links;
mod path;
mod thumbnail;
mod video;

pub use links::{find_hd_alternate, is_hd};
pub use path::is_truthy;
pub use thumbnail::extract_thumbnail;
pub use video::extract_video_url;

use crate::entities::ExtractedMedia;

use serde_json::Value;

/// `None` if no heuristic produced a video url.
pub fn extract_media(payload: &Value) -> Option<ExtractedMedia> {
    let video_url = extract_video_url(payload)?;
    let thumbnail = extract_thumbnail(payload);
    Some(ExtractedMedia { video_url, thumbnail })
}
