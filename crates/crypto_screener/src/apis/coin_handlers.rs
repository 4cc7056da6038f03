use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    models::markets::MarketRecord,
    utils::errors::{error_payload::ErrorPayload, AppError},
    AppState,
};

use super::api_models::query::SearchCoinsQuery;

const TAG: &str = "coins";

/// Screener listing narrowed by name or symbol. Upstream failures answer with
/// an empty list.
#[utoipa::path(
    get,
    tag = TAG,
    path = "/search-coins",
    responses(
        (status = 200, description = "At most ten matching coins", body = Vec<MarketRecord>),
        (status = 400, description = "Malformed query", body = ErrorPayload)
    ),
    params(SearchCoinsQuery)
)]
pub(super) async fn search_coins(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<SearchCoinsQuery>,
) -> Result<(StatusCode, Json<Vec<MarketRecord>>), AppError> {
    let coins = app_state
        .market_service
        .search_coins(&query.q)
        .await
        .into_inner();

    Ok((StatusCode::OK, Json(coins)))
}
