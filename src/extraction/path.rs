use serde_json::Value;

/// `null`, `false`, zero and empty strings count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(val) => *val,
        Value::Number(val) => val.as_f64().is_some_and(|val| val != 0.0),
        Value::String(val) => !val.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a scalar, used for urls and quality labels.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(val) if !val.is_empty() => Some(val.clone()),
        Value::Number(val) => Some(val.to_string()),
        _ => None,
    }
}

/// Resolves a dotted path like `item.video.cover`.
///
/// Each segment has to be an own key of the current object (or an index of the current array).
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |cur, segment| match cur {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

/// First path that resolves to truthy text. Truthy values of other shapes are skipped.
pub fn get_first_text(value: &Value, paths: &[&str]) -> Option<String> {
    paths
        .iter()
        .filter_map(|path| get_path(value, path))
        .filter(|val| is_truthy(val))
        .find_map(as_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_get_path_nested() {
        let payload = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(get_path(&payload, "a.b.c"), Some(&json!("deep")));
        assert_eq!(get_path(&payload, "a.b"), Some(&json!({"c": "deep"})));
        assert_eq!(get_path(&payload, "a.x.c"), None);
        assert_eq!(get_path(&payload, "a.b.c.d"), None);
    }

    #[test]
    fn test_get_path_array_index() {
        let payload = json!({"files": ["first", "second"]});
        assert_eq!(get_path(&payload, "files.1"), Some(&json!("second")));
        assert_eq!(get_path(&payload, "files.2"), None);
        assert_eq!(get_path(&payload, "files.len"), None);
    }

    #[test]
    fn test_first_text_skips_falsy() {
        let payload = json!({"video_url": "", "videoUrl": 0, "video": false, "data": {"video": "https://a/b.mp4"}});
        assert_eq!(
            get_first_text(&payload, &["video_url", "videoUrl", "video", "data.video"]).as_deref(),
            Some("https://a/b.mp4")
        );
    }

    #[test]
    fn test_first_text_none() {
        let payload = json!({"video_url": null});
        assert_eq!(get_first_text(&payload, &["video_url", "missing.path"]), None);
        assert_eq!(get_first_text(&json!("text"), &["video_url"]), None);
    }

    #[test]
    fn test_first_text_skips_objects() {
        let payload = json!({"video": {"playAddr": "x"}, "video_url": "https://a/b.mp4"});
        assert_eq!(get_first_text(&payload, &["video", "video_url"]).as_deref(), Some("https://a/b.mp4"));
    }

    #[test]
    fn test_as_text_numbers() {
        assert_eq!(as_text(&json!(720)).as_deref(), Some("720"));
        assert_eq!(as_text(&json!("")), None);
        assert_eq!(as_text(&json!([1])), None);
    }
}
