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

//! Post-call ratings submitted by shoppers.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Records kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// One shopper's rating of a finished call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub call_id: String,
    pub user_id: String,
    pub rating: u8,
    pub received_at: DateTime<Utc>,
}

/// In-memory log of received feedback, shared by all handlers.
///
/// Bounded: once `capacity` records are held, each new record evicts the
/// oldest one.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    records: Arc<RwLock<VecDeque<FeedbackRecord>>>,
    capacity: usize,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log holding at most `capacity` records (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let initial = capacity.min(DEFAULT_CAPACITY);
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(initial))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn record(&self, call_id: &str, user_id: &str, rating: u8) -> FeedbackRecord {
        let record = FeedbackRecord {
            call_id: call_id.to_string(),
            user_id: user_id.to_string(),
            rating,
            received_at: Utc::now(),
        };
        tracing::info!(call_id, user_id, rating, "Feedback received");

        let mut records = self.records.write().await;
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record.clone());
        record
    }

    /// Held records, oldest first.
    pub async fn records(&self) -> Vec<FeedbackRecord> {
        self.records.read().await.iter().cloned().collect()
    }
}
