use crate::{
    config::ConverterConfig,
    entities::{
        download::{SIZE_AUTO, SIZE_UNKNOWN},
        Download, LookupMedia, MediaFormat,
    },
    extraction::{find_hd_alternate, is_hd, is_truthy},
    interactors::Interactor,
    services::{convert_to_audio, ConvertErrorKind, Converted},
};

use reqwest::Client;
use serde_json::Value;
use std::{convert::Infallible, sync::Arc};
use tracing::{debug, instrument, warn};

const VIDEO_TITLE: &str = "TikTok Video";
const MEDIA_TITLE: &str = "TikTok Media";
const AUDIO_TITLE: &str = "TikTok Audio";

const VIDEO_NOTE: &str =
    "Direct media URL (proxying not performed). If your browser blocks CORS, consider proxying the media through your server.";
const CONVERTED_NOTE: &str = "Converted via external converter";
const NO_CONVERTER_NOTE: &str = "No MP3 converter is configured yet. For automatic MP3, set the CONVERTER_API environment variable \
                                 to the URL of a conversion service, or deploy on a server with ffmpeg and enable conversion.";

pub struct PrepareDownloadInput<'a> {
    pub format: MediaFormat,
    pub media: &'a LookupMedia,
}

impl<'a> PrepareDownloadInput<'a> {
    pub const fn new(format: MediaFormat, media: &'a LookupMedia) -> Self {
        Self { format, media }
    }
}

/// Shapes the final response for the requested format.
///
/// Never fails: a broken or missing converter degrades mp3 requests to the plain video url.
pub struct PrepareDownload {
    client: Client,
    converter_cfg: Arc<ConverterConfig>,
}

impl PrepareDownload {
    pub const fn new(client: Client, converter_cfg: Arc<ConverterConfig>) -> Self {
        Self { client, converter_cfg }
    }

    async fn audio(&self, media: &LookupMedia) -> Download {
        let Some(api_url) = &self.converter_cfg.url else {
            debug!("Converter isn't configured");
            return unconverted(media, NO_CONVERTER_NOTE.to_owned());
        };

        match convert_to_audio(&self.client, api_url, &media.media.video_url, self.converter_cfg.timeout()).await {
            Ok(converted) => converted_audio(media, converted),
            Err(err) => {
                warn!(%err, "Convert err");
                unconverted(media, conversion_failed_note(&err))
            }
        }
    }
}

fn conversion_failed_note(err: &ConvertErrorKind) -> String {
    format!(
        "MP3 conversion failed: {err}. If you want automatic MP3, set CONVERTER_API in the environment \
         to a conversion service (or run the server with ffmpeg)."
    )
}

fn converted_audio(media: &LookupMedia, Converted { download_url, title, size }: Converted) -> Download {
    Download {
        title: media
            .title()
            .map(ToOwned::to_owned)
            .or(title)
            .unwrap_or_else(|| AUDIO_TITLE.to_owned()),
        thumbnail: media.media.thumbnail.clone(),
        size: size.filter(is_truthy).unwrap_or_else(|| SIZE_UNKNOWN.into()),
        download_url,
        note: CONVERTED_NOTE.to_owned(),
    }
}

fn unconverted(media: &LookupMedia, note: String) -> Download {
    Download {
        title: media.title().unwrap_or(MEDIA_TITLE).to_owned(),
        thumbnail: media.media.thumbnail.clone(),
        size: SIZE_UNKNOWN.into(),
        download_url: media.media.video_url.clone(),
        note,
    }
}

fn video(media: &LookupMedia, prefer_hd: bool) -> Download {
    let video_url = &media.media.video_url;
    let download_url = if prefer_hd && !is_hd(video_url) {
        find_hd_alternate(&media.payload).unwrap_or_else(|| video_url.clone())
    } else {
        video_url.clone()
    };

    Download {
        title: media.title().unwrap_or(VIDEO_TITLE).to_owned(),
        thumbnail: media.media.thumbnail.clone(),
        size: Value::from(SIZE_AUTO),
        download_url,
        note: VIDEO_NOTE.to_owned(),
    }
}

impl Interactor<PrepareDownloadInput<'_>> for &PrepareDownload {
    type Output = Download;
    type Err = Infallible;

    #[instrument(skip_all)]
    async fn execute(self, PrepareDownloadInput { format, media }: PrepareDownloadInput<'_>) -> Result<Self::Output, Self::Err> {
        debug!(%format, "Preparing download");
        let download = match format {
            MediaFormat::Mp3 => self.audio(media).await,
            MediaFormat::Mp4Hd => video(media, true),
            MediaFormat::Mp4 => video(media, false),
        };
        Ok(download)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entities::ExtractedMedia;

    use serde_json::json;

    fn lookup_media(payload: Value) -> LookupMedia {
        let media = crate::extraction::extract_media(&payload).unwrap();
        LookupMedia::new(payload, media)
    }

    fn prepare_download() -> PrepareDownload {
        PrepareDownload::new(Client::new(), Arc::new(ConverterConfig::default()))
    }

    async fn execute(format: MediaFormat, media: &LookupMedia) -> Download {
        prepare_download()
            .execute(PrepareDownloadInput::new(format, media))
            .await
            .unwrap_or_else(|err| match err {})
    }

    #[tokio::test]
    async fn test_mp4_returns_url_as_is() {
        let media = lookup_media(json!({
            "title": "clip",
            "thumbnail": "https://img.example.com/t.jpg",
            "video_url": "https://v.example.com/sd.mp4",
            "other": "https://v.example.com/1080.mp4",
        }));
        assert_eq!(
            execute(MediaFormat::Mp4, &media).await,
            Download {
                title: "clip".to_owned(),
                thumbnail: "https://img.example.com/t.jpg".to_owned(),
                size: json!("auto"),
                download_url: "https://v.example.com/sd.mp4".to_owned(),
                note: VIDEO_NOTE.to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn test_mp4hd_prefers_alternate() {
        let media = lookup_media(json!({
            "video_url": "https://v.example.com/sd.mp4",
            "other": "https://v.example.com/1080.mp4",
        }));
        let download = execute(MediaFormat::Mp4Hd, &media).await;
        assert_eq!(download.download_url, "https://v.example.com/1080.mp4");
        assert_eq!(download.title, VIDEO_TITLE);
        assert_eq!(download.thumbnail, "");
    }

    #[tokio::test]
    async fn test_mp4hd_keeps_hd_url() {
        let media = lookup_media(json!({
            "video_url": "https://v.example.com/720.mp4",
            "other": "https://v.example.com/1080.mp4",
        }));
        assert_eq!(
            execute(MediaFormat::Mp4Hd, &media).await.download_url,
            "https://v.example.com/720.mp4"
        );
    }

    #[tokio::test]
    async fn test_mp4hd_without_alternate() {
        let media = lookup_media(json!({"video_url": "https://v.example.com/sd.mp4"}));
        assert_eq!(
            execute(MediaFormat::Mp4Hd, &media).await.download_url,
            "https://v.example.com/sd.mp4"
        );
    }

    #[tokio::test]
    async fn test_mp3_without_converter() {
        let media = LookupMedia::new(
            json!({"title": ""}),
            ExtractedMedia {
                video_url: "https://v.example.com/a.mp4".to_owned(),
                thumbnail: String::new(),
            },
        );
        let download = execute(MediaFormat::Mp3, &media).await;
        assert_eq!(download.title, MEDIA_TITLE);
        assert_eq!(download.size, json!("unknown"));
        assert_eq!(download.download_url, "https://v.example.com/a.mp4");
        assert!(download.note.contains("CONVERTER_API"));
    }

    #[test]
    fn test_converted_title_priority() {
        let media = LookupMedia::new(
            json!({}),
            ExtractedMedia {
                video_url: "v".to_owned(),
                thumbnail: "t".to_owned(),
            },
        );
        let download = converted_audio(
            &media,
            Converted {
                download_url: "x".to_owned(),
                title: Some("from converter".to_owned()),
                size: Some(json!(0)),
            },
        );
        assert_eq!(download.title, "from converter");
        assert_eq!(download.size, json!("unknown"));
        assert_eq!(download.download_url, "x");

        let download = converted_audio(
            &media,
            Converted {
                download_url: "x".to_owned(),
                title: None,
                size: Some(json!(1024)),
            },
        );
        assert_eq!(download.title, AUDIO_TITLE);
        assert_eq!(download.size, json!(1024));
    }

    #[test]
    fn test_conversion_failed_note() {
        let note = conversion_failed_note(&ConvertErrorKind::Status(500));
        assert!(note.starts_with("MP3 conversion failed: Converter service returned 500."));
        assert!(note.contains("CONVERTER_API"));
    }
}
