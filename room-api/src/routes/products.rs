/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Handlers serving product page data.

use axum::{
    extract::{Path, State},
    Json,
};
use expert_call_types::{DebugEntry, Product, ProductSlugsResponse};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/products
///
/// Slugs of every product page.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductSlugsResponse>, AppError> {
    let slugs = state.content.product_slugs().await?;
    Ok(Json(ProductSlugsResponse { slugs }))
}

/// GET /api/products/{slug}
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, AppError> {
    state
        .content
        .product_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(AppError::product_not_found)
}

/// GET /api/debug/entries
///
/// Every entry in the content space. A failing content API yields an empty
/// list; the cause is only logged.
pub async fn debug_entries(State(state): State<AppState>) -> Json<Vec<DebugEntry>> {
    match state.content.debug_entries().await {
        Ok(entries) => Json(entries),
        Err(e) => {
            tracing::error!("Error fetching content entries: {e}");
            Json(Vec::new())
        }
    }
}
