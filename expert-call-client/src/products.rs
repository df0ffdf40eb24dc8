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

//! Product content endpoints.

use expert_call_types::{DebugEntry, Product, ProductSlugsResponse};

use crate::error::ApiError;
use crate::{parse_response, RoomApiClient};

impl RoomApiClient {
    /// Slugs of every product page.
    ///
    /// Calls `GET /api/products`.
    pub async fn list_product_slugs(&self) -> Result<Vec<String>, ApiError> {
        let response = self.get("/api/products").send().await?;
        let body: ProductSlugsResponse = parse_response(response).await?;
        Ok(body.slugs)
    }

    /// The product behind a page, or `None` when the slug is unknown.
    ///
    /// Calls `GET /api/products/{slug}`.
    pub async fn get_product(&self, slug: &str) -> Result<Option<Product>, ApiError> {
        let path = format!("/api/products/{slug}");
        let response = self.get(&path).send().await?;
        match parse_response(response).await {
            Ok(product) => Ok(Some(product)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Calls `GET /api/debug/entries`.
    pub async fn list_debug_entries(&self) -> Result<Vec<DebugEntry>, ApiError> {
        let response = self.get("/api/debug/entries").send().await?;
        parse_response(response).await
    }
}
