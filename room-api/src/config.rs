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

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the Room API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:3000").
    pub listen_addr: String,
    /// Video platform credentials and endpoint.
    pub stream: StreamConfig,
    /// Content store credentials and endpoint.
    pub contentful: ContentfulConfig,
    /// Maximum number of feedback records kept in memory (default: 1000).
    pub feedback_capacity: usize,
}

/// Stream Video configuration.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Public API key, handed to clients alongside their token.
    pub api_key: String,
    /// API secret used to sign user and server tokens (HMAC-SHA256).
    pub api_secret: String,
    pub base_url: String,
    /// User token time-to-live in seconds (default: 3600).
    pub token_ttl_secs: i64,
}

/// Contentful Delivery API configuration.
#[derive(Debug, Clone)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub base_url: String,
    /// Content type id of product entries (default: "pageProduct").
    pub product_type: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `STREAM_API_KEY`
    /// - `STREAM_API_SECRET`
    /// - `CONTENTFUL_SPACE_ID`
    /// - `CONTENTFUL_ACCESS_TOKEN`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:3000"`)
    /// - `TOKEN_TTL_SECS` (default: `"3600"`)
    /// - `STREAM_BASE_URL` (default: `"https://video.stream-io-api.com"`)
    /// - `CONTENTFUL_BASE_URL` (default: `"https://cdn.contentful.com"`)
    /// - `CONTENTFUL_ENVIRONMENT` (default: `"master"`)
    /// - `CONTENTFUL_PRODUCT_TYPE` (default: `"pageProduct"`)
    /// - `FEEDBACK_LOG_CAPACITY` (default: `"1000"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("{key} environment variable is required"))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let stream = StreamConfig {
            api_key: required("STREAM_API_KEY")?,
            api_secret: required("STREAM_API_SECRET")?,
            base_url: optional("STREAM_BASE_URL", "https://video.stream-io-api.com"),
            token_ttl_secs: optional("TOKEN_TTL_SECS", "3600")
                .parse::<i64>()
                .map_err(|_| "TOKEN_TTL_SECS must be a valid integer")?,
        };

        let contentful = ContentfulConfig {
            space_id: required("CONTENTFUL_SPACE_ID")?,
            access_token: required("CONTENTFUL_ACCESS_TOKEN")?,
            environment: optional("CONTENTFUL_ENVIRONMENT", "master"),
            base_url: optional("CONTENTFUL_BASE_URL", "https://cdn.contentful.com"),
            product_type: optional("CONTENTFUL_PRODUCT_TYPE", "pageProduct"),
        };

        let feedback_capacity = optional("FEEDBACK_LOG_CAPACITY", "1000")
            .parse::<usize>()
            .map_err(|_| "FEEDBACK_LOG_CAPACITY must be a valid non-negative integer")?;

        Ok(Self {
            listen_addr: optional("LISTEN_ADDR", "0.0.0.0:3000"),
            stream,
            contentful,
            feedback_capacity,
        })
    }
}
