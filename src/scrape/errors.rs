use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use thiserror::Error;
use tracing::{error, warn};

use crate::{
    fetcher::FetchError,
    scrape::dtos::{ErrorResponse, FailureResponse, MISSING_URL_MESSAGE},
};

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            ScrapeError::MissingUrl => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MISSING_URL_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ScrapeError::InvalidQuery(reason) => {
                warn!(%reason, "rejected query string");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Invalid query string: {reason}"),
                    }),
                )
                    .into_response()
            }
            ScrapeError::Fetch(err) => {
                error!(error = %err, upstream_status = ?err.status(), "scrape failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureResponse::new(err.to_string())),
                )
                    .into_response()
            }
        }
    }
}

/// Renders a handler panic as the regular scrape failure body.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected internal error".to_string()
    };
    error!(panic = %message, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureResponse::new(message)),
    )
        .into_response()
}
