use crate::{interactors::GetLookupMediaErrorKind, services::LookupErrorKind};

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Parameter 'url' is required.")]
    MissingUrl,
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),
    #[error(transparent)]
    GetMedia(#[from] GetLookupMediaErrorKind),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<Value>,
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::GetMedia(GetLookupMediaErrorKind::Lookup(LookupErrorKind::Status(_))) => StatusCode::BAD_GATEWAY,
            Self::GetMedia(GetLookupMediaErrorKind::Lookup(_) | GetLookupMediaErrorKind::NoMediaFound { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        // Raw payload goes back to the caller so unknown response shapes can be diagnosed
        let lookup = match self {
            Self::GetMedia(GetLookupMediaErrorKind::NoMediaFound { payload }) => Some(payload),
            _ => None,
        };
        (status, Json(ErrorBody { error, lookup })).into_response()
    }
}

/// Turns a handler panic into the same `{ error }` body as other failures.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let error = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        "Unknown panic message".to_owned()
    };
    tracing::error!(%error, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error, lookup: None })).into_response()
}
