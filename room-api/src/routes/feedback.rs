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

//! Handler for post-call feedback.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use expert_call_types::{FeedbackAck, FeedbackRequest};

use crate::error::AppError;
use crate::feedback::{MAX_RATING, MIN_RATING};
use crate::state::AppState;

/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackAck>, AppError> {
    let Ok(Json(body)) = body else {
        return Err(AppError::missing_feedback_fields());
    };

    let call_id = body.call_id.as_deref().filter(|s| !s.is_empty());
    let user_id = body.user_id.as_deref().filter(|s| !s.is_empty());
    let (Some(call_id), Some(user_id), Some(rating)) = (call_id, user_id, body.rating) else {
        return Err(AppError::missing_feedback_fields());
    };

    let rating = u8::try_from(rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(AppError::rating_out_of_range)?;

    state.feedback.record(call_id, user_id, rating).await;
    Ok(Json(FeedbackAck::recorded()))
}
