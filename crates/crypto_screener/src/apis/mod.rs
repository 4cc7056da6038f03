use std::sync::Arc;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod coin_handlers;
pub mod page_handlers;
pub mod templates;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "coins", description = "Coin lookup API")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let coin_router = OpenApiRouter::new().routes(routes!(coin_handlers::search_coins));

    let (api_router, api_openapi) = OpenApiRouter::with_openapi(api_doc)
        .nest("/api", coin_router)
        .split_for_parts();

    let page_router = Router::new()
        .route("/", get(page_handlers::dashboard))
        .route("/screener", get(page_handlers::screener))
        .route("/sentiment", get(page_handlers::sentiment))
        .route("/charts", get(page_handlers::charts));

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
        .merge(page_router)
}
