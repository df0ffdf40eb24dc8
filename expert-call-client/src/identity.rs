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

//! Caller identities presented to the video platform.
//!
//! None of these are authenticated here. A deployment with real sign-in
//! injects a [`StaticIdentity`] built from its session instead.

use rand::Rng;

use crate::video::CallUser;

/// Supplies the identity a session connects with.
pub trait IdentityProvider: Send + Sync {
    fn caller(&self) -> CallUser;
}

/// Anonymous shopper: `user-` followed by nine random base-36 characters.
///
/// Uniqueness is best-effort.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomShopperIdentity;

impl RandomShopperIdentity {
    const DISPLAY_NAME: &'static str = "User";
    const SUFFIX_LEN: usize = 9;
}

impl IdentityProvider for RandomShopperIdentity {
    fn caller(&self) -> CallUser {
        const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
        let mut rng = rand::thread_rng();
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();
        CallUser::new(format!("user-{suffix}"), Self::DISPLAY_NAME)
    }
}

/// The expert staffing a product page: `expert-<slug>`.
#[derive(Debug, Clone)]
pub struct ExpertIdentity {
    product_slug: String,
}

impl ExpertIdentity {
    const DISPLAY_NAME: &'static str = "Expert";

    pub fn for_product(product_slug: &str) -> Self {
        Self {
            product_slug: product_slug.to_string(),
        }
    }
}

impl IdentityProvider for ExpertIdentity {
    fn caller(&self) -> CallUser {
        CallUser::new(
            format!("expert-{}", self.product_slug),
            Self::DISPLAY_NAME,
        )
    }
}

/// A fixed identity, typically taken from an authenticated user session.
#[derive(Debug, Clone)]
pub struct StaticIdentity(CallUser);

impl StaticIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self(CallUser::new(id, name))
    }
}

impl IdentityProvider for StaticIdentity {
    fn caller(&self) -> CallUser {
        self.0.clone()
    }
}
