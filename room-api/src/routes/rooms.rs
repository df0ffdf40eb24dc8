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

//! Handler for room provisioning.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use expert_call_types::{CallRef, CreateRoomRequest, CreateRoomResponse};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/create-room
///
/// Gets or creates the product's room (`product-<slug>`) and signs an access
/// token for the caller. Shopper and expert hit this independently and land
/// in the same room because the id depends only on the slug.
pub async fn create_room(
    State(state): State<AppState>,
    body: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("Rejected create-room body: {rejection}");
            return Err(AppError::missing_room_fields());
        }
    };
    let (product_slug, user_id) = body.fields().ok_or_else(AppError::missing_room_fields)?;

    let call = CallRef::for_product(product_slug);

    state.platform.get_or_create_call(&call, user_id).await?;
    let token = state.platform.create_token(user_id)?;

    tracing::info!(%call, user_id, "Issued room credentials");

    Ok(Json(CreateRoomResponse {
        call_id: call.call_id,
        token,
        api_key: state.platform.api_key().to_string(),
    }))
}
