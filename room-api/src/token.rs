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

//! JWT generation for the video platform.
//!
//! Both token kinds are signed with the platform API secret. User tokens go to
//! callers, who present them when connecting; the server token authenticates
//! this backend's own REST calls.

use chrono::Utc;
use expert_call_types::UserTokenClaims;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

/// Seconds `iat` is backdated so a platform clock running slightly behind
/// does not reject a fresh token.
const CLOCK_SKEW_SECS: i64 = 5;

#[derive(Serialize)]
struct ServerClaims {
    server: bool,
}

/// Sign an access token for `user_id`, valid for `ttl_secs`.
pub fn generate_user_token(
    secret: &str,
    ttl_secs: i64,
    user_id: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = UserTokenClaims {
        user_id: user_id.to_string(),
        iat: now - CLOCK_SKEW_SECS,
        exp: now + ttl_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Sign the server-side token used on REST calls to the video platform.
pub fn generate_server_token(secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        &ServerClaims { server: true },
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
