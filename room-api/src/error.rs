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

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `{ "message": ... }` paired with the
//! appropriate HTTP status code. Internal causes are logged where they
//! happen and never copied into the response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use expert_call_types::ErrorMessage;

use crate::content::ContentError;
use crate::platform::PlatformError;

/// Application-level error that pairs an HTTP status code with an [`ErrorMessage`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: ErrorMessage,
}

impl AppError {
    pub fn new(status: StatusCode, body: ErrorMessage) -> Self {
        Self { status, body }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorMessage::method_not_allowed(),
        )
    }

    pub fn missing_room_fields() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::missing_room_fields())
    }

    pub fn missing_feedback_fields() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorMessage::missing_feedback_fields(),
        )
    }

    pub fn rating_out_of_range() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::rating_out_of_range())
    }

    pub fn product_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorMessage::product_not_found())
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorMessage::internal())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<PlatformError> for AppError {
    fn from(err: PlatformError) -> Self {
        tracing::error!("Video platform error: {err}");
        Self::internal()
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        tracing::error!("Content store error: {err}");
        Self::internal()
    }
}

/// Fallback for routes hit with an unsupported HTTP method.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
