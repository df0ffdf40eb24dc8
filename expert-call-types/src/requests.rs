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

//! Request bodies for the room API.
//!
//! Fields are optional on the wire so the server can answer a missing field
//! with its own 400 message instead of a deserializer rejection.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/create-room`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CreateRoomRequest {
    pub fn new(product_slug: &str, user_id: &str) -> Self {
        Self {
            product_slug: Some(product_slug.to_string()),
            user_id: Some(user_id.to_string()),
        }
    }

    /// Returns `(product_slug, user_id)` when both are present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let slug = non_empty(self.product_slug.as_deref())?;
        let user = non_empty(self.user_id.as_deref())?;
        Some((slug, user))
    }
}

/// Body for `POST /api/feedback`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Star rating, 1 through 5. Carried as a wide integer so out-of-range
    /// values reach the server's range check instead of failing to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
