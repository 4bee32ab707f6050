use crate::{
    config::LookupConfig,
    entities::LookupMedia,
    extraction::extract_media,
    interactors::Interactor,
    services::{lookup, LookupErrorKind},
};

use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum GetLookupMediaErrorKind {
    #[error(transparent)]
    Lookup(#[from] LookupErrorKind),
    #[error("Failed to find a video URL in the lookup response. The lookup payload is returned for debugging.")]
    NoMediaFound { payload: Value },
}

pub struct GetLookupMediaInput<'a> {
    pub url: &'a str,
}

impl<'a> GetLookupMediaInput<'a> {
    pub const fn new(url: &'a str) -> Self {
        Self { url }
    }
}

pub struct GetLookupMedia {
    client: Client,
    lookup_cfg: Arc<LookupConfig>,
}

impl GetLookupMedia {
    pub const fn new(client: Client, lookup_cfg: Arc<LookupConfig>) -> Self {
        Self { client, lookup_cfg }
    }
}

impl Interactor<GetLookupMediaInput<'_>> for &GetLookupMedia {
    type Output = LookupMedia;
    type Err = GetLookupMediaErrorKind;

    #[instrument(skip_all)]
    async fn execute(self, GetLookupMediaInput { url }: GetLookupMediaInput<'_>) -> Result<Self::Output, Self::Err> {
        debug!("Looking up media");
        let payload = lookup(&self.client, &self.lookup_cfg.url, url, self.lookup_cfg.timeout()).await?;

        match extract_media(&payload) {
            Some(media) => {
                debug!(video_url = %media.video_url, "Media found");
                Ok(LookupMedia::new(payload, media))
            }
            None => {
                warn!("No video url in lookup payload");
                Err(GetLookupMediaErrorKind::NoMediaFound { payload })
            }
        }
    }
}
