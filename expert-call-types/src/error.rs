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

//! Error body shared by every failing endpoint.
//!
//! Failed requests return `{ "message": "..." }` paired with a 4xx/5xx status.
//! The message is meant for display; internal details never leave the server.

use serde::{Deserialize, Serialize};

/// Body of a non-2xx response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub const METHOD_NOT_ALLOWED: &'static str = "Method Not Allowed";
    pub const MISSING_ROOM_FIELDS: &'static str = "Missing productSlug or userId";
    pub const INTERNAL: &'static str = "Internal Server Error";
    pub const PRODUCT_NOT_FOUND: &'static str = "Product not found";
    pub const MISSING_FEEDBACK_FIELDS: &'static str = "Missing callId, userId or rating";
    pub const RATING_OUT_OF_RANGE: &'static str = "Rating must be between 1 and 5";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(Self::METHOD_NOT_ALLOWED)
    }

    pub fn missing_room_fields() -> Self {
        Self::new(Self::MISSING_ROOM_FIELDS)
    }

    pub fn internal() -> Self {
        Self::new(Self::INTERNAL)
    }

    pub fn product_not_found() -> Self {
        Self::new(Self::PRODUCT_NOT_FOUND)
    }

    pub fn missing_feedback_fields() -> Self {
        Self::new(Self::MISSING_FEEDBACK_FIELDS)
    }

    pub fn rating_out_of_range() -> Self {
        Self::new(Self::RATING_OUT_OF_RANGE)
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorMessage {}
