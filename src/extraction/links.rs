use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // Slashes may come escaped (`https:\/\/`), possibly more than once
    static ref MEDIA_LINK: Regex = Regex::new(r#"(?i)https?:\\*/\\*/[^"']+?(?:\.mp4|\.m3u8|video|cdn[^"']+?)"#).unwrap();
    static ref ALTERNATE_LINK: Regex = Regex::new(r#"(?i)https?:\\*/\\*/[^"']+?(?:\.mp4|m3u8|cdn[^"']+?)"#).unwrap();
    static ref HD_MARKER: Regex = Regex::new(r"(?i)1080|720|hd").unwrap();
}

fn unescape(link: &str) -> String {
    link.replace('\\', "")
}

/// Looks like an hd link or an hd quality label.
pub fn is_hd(text: &str) -> bool {
    HD_MARKER.is_match(text)
}

/// First media-looking https link anywhere in the serialized payload.
pub fn find_media_link(payload: &Value) -> Option<String> {
    let text = payload.to_string();
    MEDIA_LINK.find(&text).map(|link| unescape(link.as_str()))
}

/// First link in the serialized payload that looks like an hd variant.
pub fn find_hd_alternate(payload: &Value) -> Option<String> {
    let text = payload.to_string();
    ALTERNATE_LINK
        .find_iter(&text)
        .map(|link| unescape(link.as_str()))
        .find(|link| is_hd(link))
}
