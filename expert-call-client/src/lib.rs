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

//! Client side of the product expert call.
//!
//! Two layers:
//!
//! - [`RoomApiClient`], a typed REST client for the room API (room
//!   provisioning, product content, feedback).
//! - The call session state machines, [`ShopperSession`] and
//!   [`ExpertSession`], which drive page state around an opaque
//!   [`VideoConnector`] supplied by the video platform SDK.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use expert_call_client::{
//!     LogFeedbackSink, RandomShopperIdentity, RoomApiClient, ShopperSession, VideoConnector,
//! };
//!
//! # async fn example(connector: Arc<dyn VideoConnector>) -> Result<(), Box<dyn std::error::Error>> {
//! let api = Arc::new(RoomApiClient::new("http://localhost:3000"));
//! let product = api.get_product("desk-lamp").await?.expect("product page exists");
//!
//! let mut session = ShopperSession::new(
//!     product,
//!     api.clone(),
//!     connector,
//!     Arc::new(RandomShopperIdentity),
//!     api,
//! );
//! session.join().await?;
//! println!("{}", session.presence().expect("in call").banner());
//! session.end_call().await?;
//! session.set_rating(5)?;
//! session.submit_feedback().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod expert;
pub mod feedback;
pub mod identity;
pub mod presence;
pub mod products;
pub mod rooms;
pub mod session;
pub mod shopper;
pub mod video;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, SessionError, VideoError};
pub use expert::{ExpertSession, ExpertState};
pub use expert_call_types;
pub use feedback::{Feedback, FeedbackSink, LogFeedbackSink};
pub use identity::{ExpertIdentity, IdentityProvider, RandomShopperIdentity, StaticIdentity};
pub use presence::RemotePresence;
pub use rooms::RoomProvisioner;
pub use session::{ActiveSession, Released};
pub use shopper::{ShopperSession, ShopperState};
pub use video::{CallUser, Participant, VideoConnection, VideoConnector};

use expert_call_types::ErrorMessage;
use reqwest::Client;

/// A typed REST client for the room API.
///
/// All methods return strongly-typed responses from [`expert_call_types`]
/// and map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct RoomApiClient {
    base_url: String,
    http: Client,
}

impl RoomApiClient {
    /// Create a new client pointing at the given room API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:3000"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Build a GET request.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    /// Build a POST request.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a JSON body on 200, or map the status and `{message}` body to
/// [`ApiError`].
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    if status == 200 {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorMessage>(&text)
        .map(|m| m.message)
        .unwrap_or(text);

    Err(match status {
        400 => ApiError::BadRequest(message),
        404 => ApiError::NotFound(message),
        405 => ApiError::MethodNotAllowed,
        _ => ApiError::ServerError {
            status,
            body: message,
        },
    })
}
