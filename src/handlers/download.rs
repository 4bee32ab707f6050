use crate::{
    di_container::AppState,
    entities::{Download, MediaFormat},
    errors::ApiError,
    interactors::{GetLookupMediaInput, Interactor as _, PrepareDownloadInput},
    utils::format_error_report,
};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub url: Option<String>,
    pub format: Option<String>,
}

#[instrument(skip_all)]
pub async fn download(
    State(state): State<AppState>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<Json<Download>, ApiError> {
    let Query(query) = query.inspect_err(|err| warn!(%err, "Invalid query"))?;
    let Some(url) = query.url.as_deref().filter(|url| !url.is_empty()) else {
        warn!("Url is missing");
        return Err(ApiError::MissingUrl);
    };
    let format = MediaFormat::from_query(query.format.as_deref());
    debug!(url, %format, "Got download request");

    let media = match state.get_lookup_media.execute(GetLookupMediaInput::new(url)).await {
        Ok(media) => media,
        Err(err) => {
            error!(err = %format_error_report(&err), "Get media err");
            return Err(err.into());
        }
    };

    let download = state
        .prepare_download
        .execute(PrepareDownloadInput::new(format, &media))
        .await
        .unwrap_or_else(|err| match err {});
    info!(download_url = %download.download_url, "Download prepared");

    Ok(Json(download))
}
