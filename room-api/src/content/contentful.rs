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

//! Contentful Delivery API implementation of [`ContentStore`].

use async_trait::async_trait;
use expert_call_types::{DebugEntry, Product};
use url::Url;

use super::entries::EntryCollection;
use super::{ContentError, ContentStore};
use crate::config::ContentfulConfig;

/// Largest page size the Delivery API accepts.
const MAX_PAGE_SIZE: &str = "1000";

pub struct ContentfulStore {
    http: reqwest::Client,
    base_url: String,
    space_id: String,
    environment: String,
    access_token: String,
    product_type: String,
}

impl ContentfulStore {
    pub fn new(config: &ContentfulConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            space_id: config.space_id.clone(),
            environment: config.environment.clone(),
            access_token: config.access_token.clone(),
            product_type: config.product_type.clone(),
        }
    }

    fn entries_url(&self) -> Result<Url, ContentError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([
                "spaces",
                self.space_id.as_str(),
                "environments",
                self.environment.as_str(),
                "entries",
            ]);
        Ok(url)
    }

    /// `getEntries` with the given query parameters.
    async fn get_entries(&self, query: &[(&str, &str)]) -> Result<EntryCollection, ContentError> {
        let mut url = self.entries_url()?;
        url.query_pairs_mut().extend_pairs(query);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentStore for ContentfulStore {
    async fn product_slugs(&self) -> Result<Vec<String>, ContentError> {
        let collection = self
            .get_entries(&[
                ("content_type", self.product_type.as_str()),
                ("limit", MAX_PAGE_SIZE),
            ])
            .await?;
        Ok(collection.products().into_iter().map(|p| p.slug).collect())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, ContentError> {
        let collection = self
            .get_entries(&[
                ("content_type", self.product_type.as_str()),
                ("fields.slug", slug),
                ("limit", "1"),
                ("include", "1"),
            ])
            .await?;
        Ok(collection
            .items
            .first()
            .and_then(|entry| collection.product(entry)))
    }

    async fn debug_entries(&self) -> Result<Vec<DebugEntry>, ContentError> {
        let collection = self.get_entries(&[("limit", MAX_PAGE_SIZE)]).await?;
        Ok(collection.debug_entries())
    }
}
