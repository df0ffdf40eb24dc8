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

//! Product content retrieval from the headless CMS.

pub mod contentful;
pub mod entries;

use async_trait::async_trait;
use expert_call_types::{DebugEntry, Product};
use thiserror::Error;

pub use contentful::ContentfulStore;

/// Errors raised while talking to the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("content API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid content API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Read-only access to product records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Slugs of every product, used to enumerate product pages.
    async fn product_slugs(&self) -> Result<Vec<String>, ContentError>;

    /// The product with `slug`, or `None` when no entry matches.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, ContentError>;

    /// Every entry in the space regardless of content type.
    async fn debug_entries(&self) -> Result<Vec<DebugEntry>, ContentError>;
}
