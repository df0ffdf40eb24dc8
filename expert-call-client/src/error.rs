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

//! Error types for the room API client and the call sessions.

use thiserror::Error;

/// Errors returned by [`RoomApiClient`](crate::RoomApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected as invalid (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The endpoint does not accept this method (HTTP 405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors reported by the video platform client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VideoError {
    #[error("failed to connect user: {0}")]
    Connect(String),

    #[error("failed to join call: {0}")]
    Join(String),

    #[error("failed to leave call: {0}")]
    Leave(String),

    #[error("failed to disconnect user: {0}")]
    Disconnect(String),
}

/// Errors returned by the session state machines.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation is not valid in the session's current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Ratings are whole stars from 1 to 5.
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Room credentials could not be obtained.
    #[error(transparent)]
    Provision(#[from] ApiError),

    /// Connecting to or joining the call failed.
    #[error(transparent)]
    Video(#[from] VideoError),
}
