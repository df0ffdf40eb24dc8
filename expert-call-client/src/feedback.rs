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

//! Post-call feedback delivery.

use async_trait::async_trait;
use expert_call_types::{FeedbackAck, FeedbackRequest};

use crate::error::ApiError;
use crate::{parse_response, RoomApiClient};

/// A shopper's rating of one finished call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub call_id: String,
    pub user_id: String,
    pub rating: u8,
}

/// Destination for submitted ratings.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn submit(&self, feedback: &Feedback) -> Result<(), ApiError>;
}

/// Writes ratings to the log and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedbackSink;

#[async_trait]
impl FeedbackSink for LogFeedbackSink {
    async fn submit(&self, feedback: &Feedback) -> Result<(), ApiError> {
        log::info!(
            "User rating: {} (call {}, user {})",
            feedback.rating,
            feedback.call_id,
            feedback.user_id
        );
        Ok(())
    }
}

impl RoomApiClient {
    /// Calls `POST /api/feedback`.
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<FeedbackAck, ApiError> {
        let body = FeedbackRequest {
            call_id: Some(feedback.call_id.clone()),
            user_id: Some(feedback.user_id.clone()),
            rating: Some(i64::from(feedback.rating)),
        };
        let response = self.post("/api/feedback").json(&body).send().await?;
        parse_response(response).await
    }
}

#[async_trait]
impl FeedbackSink for RoomApiClient {
    async fn submit(&self, feedback: &Feedback) -> Result<(), ApiError> {
        self.submit_feedback(feedback).await.map(|_| ())
    }
}
