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

//! Video platform user token (JWT) claims.
//!
//! The room API signs user tokens with the platform API secret (HMAC-SHA256);
//! the video platform validates the signature when the client connects.

use serde::{Deserialize, Serialize};

/// JWT payload for a caller's access token.
///
/// # Example payload
///
/// ```json
/// {
///   "user_id": "user-k3j9x0a1b",
///   "iat": 1707001195,
///   "exp": 1707004800
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserTokenClaims {
    /// Caller identity the token authorizes.
    pub user_id: String,

    /// Issued-at timestamp (Unix seconds), backdated slightly for clock skew.
    pub iat: i64,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}
