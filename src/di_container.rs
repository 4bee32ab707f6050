use reqwest::Client;
use std::sync::Arc;

use crate::{
    config::Config,
    interactors::{GetLookupMedia, PrepareDownload},
};

/// Everything a request needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub get_lookup_media: Arc<GetLookupMedia>,
    pub prepare_download: Arc<PrepareDownload>,
}

pub fn init(config: &Config) -> AppState {
    let client = Client::new();

    AppState {
        get_lookup_media: Arc::new(GetLookupMedia::new(client.clone(), Arc::new(config.lookup.clone()))),
        prepare_download: Arc::new(PrepareDownload::new(client, Arc::new(config.converter.clone()))),
    }
}
