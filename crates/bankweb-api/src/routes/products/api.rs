//! Product API endpoints - JSON API

use axum::extract::{Path, State};
use axum::Json;
use bankweb_core::{BankingProduct, CatalogSummary, GroupedProducts};

use crate::{ApiError, AppState};

pub async fn api_products(State(state): State<AppState>) -> Json<Vec<BankingProduct>> {
    let catalog = state.catalog.read().await;
    Json(catalog.products().to_vec())
}

pub async fn api_product_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BankingProduct>, ApiError> {
    let catalog = state.catalog.read().await;
    Ok(Json(catalog.product(&id)?.clone()))
}

pub async fn api_products_grouped(State(state): State<AppState>) -> Json<GroupedProducts> {
    let catalog = state.catalog.read().await;
    Json(catalog.grouped().clone())
}

pub async fn api_products_summary(State(state): State<AppState>) -> Json<CatalogSummary> {
    let catalog = state.catalog.read().await;
    Json(catalog.summary())
}
