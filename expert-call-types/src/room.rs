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

//! Call room naming.
//!
//! A room is identified by `(type, id)` on the video platform. The id is a
//! pure function of the product slug, so a shopper and an expert visiting the
//! same product always land in the same room without talking to each other.

use serde::{Deserialize, Serialize};

/// Call type used for every product room.
pub const CALL_TYPE: &str = "default";

const CALL_ID_PREFIX: &str = "product-";

/// Room id for a product: `product-<slug>`.
pub fn call_id_for(product_slug: &str) -> String {
    format!("{CALL_ID_PREFIX}{product_slug}")
}

/// Reference to a call room on the video platform.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct CallRef {
    pub call_type: String,
    pub call_id: String,
}

impl CallRef {
    /// A `default`-type room with the given id.
    pub fn new(call_id: impl Into<String>) -> Self {
        Self {
            call_type: CALL_TYPE.to_string(),
            call_id: call_id.into(),
        }
    }

    pub fn for_product(product_slug: &str) -> Self {
        Self::new(call_id_for(product_slug))
    }
}

impl std::fmt::Display for CallRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.call_type, self.call_id)
    }
}
