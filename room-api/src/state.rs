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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;

use crate::config::Config;
use crate::content::{ContentStore, ContentfulStore};
use crate::feedback::FeedbackLog;
use crate::platform::{StreamVideoPlatform, VideoPlatform};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Video platform used to provision rooms and sign tokens.
    pub platform: Arc<dyn VideoPlatform>,
    /// Product content source.
    pub content: Arc<dyn ContentStore>,
    /// Received post-call ratings.
    pub feedback: FeedbackLog,
}

impl AppState {
    pub fn new(platform: Arc<dyn VideoPlatform>, content: Arc<dyn ContentStore>) -> Self {
        Self::with_feedback_log(platform, content, FeedbackLog::new())
    }

    pub fn with_feedback_log(
        platform: Arc<dyn VideoPlatform>,
        content: Arc<dyn ContentStore>,
        feedback: FeedbackLog,
    ) -> Self {
        Self {
            platform,
            content,
            feedback,
        }
    }

    /// State backed by Stream Video and Contentful.
    pub fn from_config(config: &Config) -> Self {
        Self::with_feedback_log(
            Arc::new(StreamVideoPlatform::new(&config.stream)),
            Arc::new(ContentfulStore::new(&config.contentful)),
            FeedbackLog::with_capacity(config.feedback_capacity),
        )
    }
}
