use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Answer every successful OPTIONS request with `204 No Content`.
///
/// The CORS layer replies to preflights itself with `200`; this runs outside
/// it so plain and preflight OPTIONS requests look the same to clients.
pub async fn no_content_preflight(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut response = next.run(req).await;

    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    response
}
