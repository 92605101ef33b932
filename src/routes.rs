use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware,
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    extractor::{DebugInfo, LanguageInfo, ResultRecord},
    health,
    middleware::no_content_preflight,
    scrape::{
        self,
        dtos::{ErrorResponse, FailureDetails, FailureResponse, ScrapeResponse},
        errors::panic_response,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(scrape::handlers::scrape_review, health::health_check),
    components(schemas(
        ScrapeResponse,
        ResultRecord,
        LanguageInfo,
        DebugInfo,
        ErrorResponse,
        FailureResponse,
        FailureDetails
    )),
    tags(
        (name = "scrape", description = "Review page extraction"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/scrape",
            get(scrape::scrape_review).options(scrape::preflight),
        )
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(middleware::from_fn(no_content_preflight))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
