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

//! Room provisioning endpoint.

use async_trait::async_trait;
use expert_call_types::{CreateRoomRequest, SessionCredentials};

use crate::error::ApiError;
use crate::{parse_response, RoomApiClient};

/// Source of room credentials for a caller.
///
/// Implemented by [`RoomApiClient`]; sessions take it as a trait object so the
/// endpoint can be swapped out.
#[async_trait]
pub trait RoomProvisioner: Send + Sync {
    async fn create_room(
        &self,
        product_slug: &str,
        user_id: &str,
    ) -> Result<SessionCredentials, ApiError>;
}

impl RoomApiClient {
    /// Get or create the product's call room and obtain a token for `user_id`.
    ///
    /// Calls `POST /api/create-room`. The returned `call_id` is always
    /// `product-<product_slug>`.
    pub async fn create_room(
        &self,
        product_slug: &str,
        user_id: &str,
    ) -> Result<SessionCredentials, ApiError> {
        let body = CreateRoomRequest::new(product_slug, user_id);
        let response = self.post("/api/create-room").json(&body).send().await?;
        parse_response(response).await
    }
}

#[async_trait]
impl RoomProvisioner for RoomApiClient {
    async fn create_room(
        &self,
        product_slug: &str,
        user_id: &str,
    ) -> Result<SessionCredentials, ApiError> {
        RoomApiClient::create_room(self, product_slug, user_id).await
    }
}
