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

//! Product records as served to product pages.

use serde::{Deserialize, Serialize};

/// A product page's data, keyed by `slug`.
///
/// Read-only: sourced from the content store and never mutated after fetch.
///
/// ```json
/// {
///   "name": "Trail Runner 2",
///   "slug": "trail-runner-2",
///   "description": "Lightweight trail shoe.",
///   "imageUrl": "https://images.ctfassets.net/abc/shoe.png"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Absolute image URL. Absent when the entry has no resolvable image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One row of the content debug listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DebugEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
}
