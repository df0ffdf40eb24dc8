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

//! Stream Video REST implementation of [`VideoPlatform`].

use async_trait::async_trait;
use expert_call_types::CallRef;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{PlatformError, VideoPlatform};
use crate::config::StreamConfig;
use crate::token::{generate_server_token, generate_user_token};

#[derive(Serialize)]
struct GetOrCreateCallRequest<'a> {
    data: CallRequestData<'a>,
}

#[derive(Serialize)]
struct CallRequestData<'a> {
    created_by_id: &'a str,
}

#[derive(Debug, Deserialize, Default)]
struct GetOrCreateCallResponse {
    #[serde(default)]
    created: bool,
}

/// Talks to the Stream Video server API with the configured key and secret.
pub struct StreamVideoPlatform {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    token_ttl_secs: i64,
}

impl StreamVideoPlatform {
    pub fn new(config: &StreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// `{base}/api/v2/video/call/{type}/{id}?api_key={key}`
    fn call_url(&self, call: &CallRef) -> Result<Url, PlatformError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([
                "api",
                "v2",
                "video",
                "call",
                call.call_type.as_str(),
                call.call_id.as_str(),
            ]);
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl VideoPlatform for StreamVideoPlatform {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    async fn get_or_create_call(
        &self,
        call: &CallRef,
        created_by_id: &str,
    ) -> Result<(), PlatformError> {
        let url = self.call_url(call)?;
        let server_token = generate_server_token(&self.api_secret)?;

        let response = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, server_token)
            .header("stream-auth-type", "jwt")
            .json(&GetOrCreateCallRequest {
                data: CallRequestData { created_by_id },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlatformError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GetOrCreateCallResponse = response.json().await.unwrap_or_default();
        tracing::debug!(%call, created = parsed.created, "Call room ready");
        Ok(())
    }

    fn create_token(&self, user_id: &str) -> Result<String, PlatformError> {
        Ok(generate_user_token(
            &self.api_secret,
            self.token_ttl_secs,
            user_id,
        )?)
    }
}
