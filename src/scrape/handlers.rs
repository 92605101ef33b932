use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use tracing::{info, instrument};

use crate::{
    app_state::AppState,
    extractor,
    scrape::{
        dtos::{ErrorResponse, FailureResponse, ScrapeParams, ScrapeResponse},
        errors::ScrapeError,
    },
};

#[utoipa::path(
    get,
    path = "/api/scrape",
    tag = "scrape",
    params(ScrapeParams),
    responses(
        (status = 200, description = "Review extracted", body = ScrapeResponse),
        (status = 400, description = "Missing url parameter or malformed query", body = ErrorResponse),
        (status = 500, description = "Page could not be fetched", body = FailureResponse)
    )
)]
#[instrument(skip_all, fields(url = tracing::field::Empty))]
pub async fn scrape_review(
    State(state): State<AppState>,
    params: Result<Query<ScrapeParams>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, ScrapeError> {
    let Query(params) =
        params.map_err(|rejection| ScrapeError::InvalidQuery(rejection.body_text()))?;
    let url = params.url().ok_or(ScrapeError::MissingUrl)?;
    tracing::Span::current().record("url", url);

    let page = state.fetcher.fetch(url).await?;
    let review = extractor::extract(&page);

    info!(
        status = page.status_code(),
        rating = review.record.rating,
        has_business_name = review.debug.has_business_name,
        has_reviewer_name = review.debug.has_reviewer_name,
        has_review_text = review.debug.has_review_text,
        "review extracted"
    );

    Ok(Json(ScrapeResponse::from(review)))
}

/// Plain OPTIONS requests; CORS preflights are answered by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
