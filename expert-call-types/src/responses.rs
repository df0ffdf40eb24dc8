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

//! Response payloads for the room API.

use serde::{Deserialize, Serialize};

/// Response payload for `POST /api/create-room` (200 OK).
///
/// Everything a client needs to connect to the video platform and join the
/// product's room. Issued once per join attempt and never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub call_id: String,
    /// Signed user token for the video platform.
    pub token: String,
    /// Public video platform API key.
    pub api_key: String,
}

/// Client-side name for the credentials returned by the provisioning endpoint.
pub type SessionCredentials = CreateRoomResponse;

/// Response payload for `GET /api/products`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductSlugsResponse {
    pub slugs: Vec<String>,
}

/// Response payload for `POST /api/feedback` (200 OK).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FeedbackAck {
    pub message: String,
}

impl FeedbackAck {
    pub const RECORDED: &'static str = "Feedback recorded";

    pub fn recorded() -> Self {
        Self {
            message: Self::RECORDED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_room_response_matches_wire_names() {
        let json = r#"{"callId":"product-lamp","token":"t","apiKey":"k"}"#;
        let parsed: CreateRoomResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.call_id, "product-lamp");
        assert_eq!(parsed.api_key, "k");
    }
}
