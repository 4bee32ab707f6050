use super::{
    links::{find_media_link, is_hd},
    path::{as_text, get_first_text, get_path, is_truthy},
};

use serde_json::Value;

type Heuristic = fn(&Value) -> Option<String>;

const VIDEO_FIELDS: &[&str] = &["video_url", "videoUrl", "video", "data.video", "result.video"];

const PLAY_ADDRESS_FIELDS: &[&str] = &[
    "itemInfo.itemStruct.video.playAddr",
    "item.video.playAddr",
    "data.playAddr",
    "result.playAddr",
];

const ALTERNATE_FIELDS: &[&str] = &[
    "video_url",
    "videoUrl",
    "downloadUrl",
    "download_url",
    "video",
    "data.playUrl",
    "itemInfo.itemStruct.video.playAddr",
    "item.video.playAddr",
    "cover_url",
    "result.video",
    "result.video_url",
];

// Order matters: first heuristic to produce a url wins
const HEURISTICS: [Heuristic; 6] = [
    from_download_variants,
    from_video_fields,
    from_play_address,
    from_files,
    from_embedded_link,
    from_alternate_fields,
];

fn truthy_text(value: &Value) -> Option<String> {
    Some(value).filter(|val| is_truthy(val)).and_then(as_text)
}

/// `download: [{quality, url}, ..]`, preferring an hd variant over the first one.
fn from_download_variants(payload: &Value) -> Option<String> {
    let variants = get_path(payload, "download")?.as_array()?;

    let hd_url = variants
        .iter()
        .find(|variant| {
            variant
                .get("quality")
                .and_then(truthy_text)
                .is_some_and(|quality| is_hd(&quality))
        })
        .and_then(|variant| variant.get("url"))
        .and_then(truthy_text);

    hd_url.or_else(|| {
        let first = variants.first()?;
        first.get("url").and_then(truthy_text).or_else(|| truthy_text(first))
    })
}

fn from_video_fields(payload: &Value) -> Option<String> {
    get_first_text(payload, VIDEO_FIELDS)
}

fn from_play_address(payload: &Value) -> Option<String> {
    get_first_text(payload, PLAY_ADDRESS_FIELDS)
}

/// `files: {hd, sd}` or `files: [..]`.
fn from_files(payload: &Value) -> Option<String> {
    match get_path(payload, "files")? {
        Value::Object(files) => ["hd", "sd", "0"]
            .into_iter()
            .filter_map(|key| files.get(key))
            .find(|val| is_truthy(val))
            .and_then(as_text),
        Value::Array(files) => files.first().and_then(truthy_text),
        _ => None,
    }
}

fn from_embedded_link(payload: &Value) -> Option<String> {
    find_media_link(payload)
}

fn from_alternate_fields(payload: &Value) -> Option<String> {
    get_first_text(payload, ALTERNATE_FIELDS)
}

pub fn extract_video_url(payload: &Value) -> Option<String> {
    HEURISTICS.iter().find_map(|heuristic| heuristic(payload))
}
