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

//! Server-side surface of the external video platform.
//!
//! Room existence and membership belong to the platform. This backend only
//! asks it to get-or-create a named room and mints caller tokens.

pub mod stream;

use async_trait::async_trait;
use expert_call_types::CallRef;
use thiserror::Error;

pub use stream::StreamVideoPlatform;

/// Errors raised while talking to the video platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The platform answered with a non-success status.
    #[error("video platform returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("video platform request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("invalid video platform URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Operations the room API needs from the video platform.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Public API key handed to clients along with their token.
    fn api_key(&self) -> &str;

    /// Get the named call, creating it on first use.
    ///
    /// Idempotent by name on the platform side: concurrent calls for the same
    /// room converge on one room.
    async fn get_or_create_call(
        &self,
        call: &CallRef,
        created_by_id: &str,
    ) -> Result<(), PlatformError>;

    /// Sign a short-lived access token for `user_id`.
    fn create_token(&self, user_id: &str) -> Result<String, PlatformError>;
}
