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

//! Contentful entry collections and their mapping onto [`Product`].
//!
//! The Delivery API returns linked assets separately under `includes.Asset`;
//! an entry's `image` field is only a link (`sys.id`) into that list.

use expert_call_types::{DebugEntry, Product};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Response body of `GET /spaces/{space}/environments/{env}/entries`.
#[derive(Debug, Deserialize, Default)]
pub struct EntryCollection {
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default)]
    pub includes: Includes,
}

#[derive(Debug, Deserialize, Default)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
pub struct Sys {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Asset {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Value,
}

impl Entry {
    fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

impl EntryCollection {
    fn asset(&self, id: &str) -> Option<&Asset> {
        self.includes.assets.iter().find(|a| a.sys.id == id)
    }

    /// Resolve an entry's `image` field to an absolute URL.
    ///
    /// Accepts either a link into `includes.Asset` or an already-resolved
    /// asset carrying `fields.file.url`.
    fn image_url(&self, entry: &Entry) -> Option<String> {
        let image = entry.fields.get("image")?;
        let url = file_url(image).or_else(|| {
            let id = image.pointer("/sys/id")?.as_str()?;
            self.asset(id)?.fields.pointer("/file/url")?.as_str()
        })?;
        Some(absolute_image_url(url))
    }

    /// Map `entry` to a product. Entries without a slug are skipped.
    pub fn product(&self, entry: &Entry) -> Option<Product> {
        let slug = entry.text("slug").filter(|s| !s.is_empty())?;
        Some(Product {
            name: entry.text("name").unwrap_or_default().to_string(),
            slug: slug.to_string(),
            description: entry.text("description").unwrap_or_default().to_string(),
            image_url: self.image_url(entry),
        })
    }

    pub fn products(&self) -> Vec<Product> {
        self.items.iter().filter_map(|e| self.product(e)).collect()
    }

    pub fn debug_entries(&self) -> Vec<DebugEntry> {
        self.items
            .iter()
            .map(|entry| DebugEntry {
                id: entry.sys.id.clone(),
                name: entry
                    .text("name")
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Unnamed")
                    .to_string(),
                slug: entry.text("slug").unwrap_or_default().to_string(),
                description: entry.text("description").unwrap_or_default().to_string(),
            })
            .collect()
    }
}

fn file_url(image: &Value) -> Option<&str> {
    image.pointer("/fields/file/url")?.as_str()
}

/// Contentful serves asset URLs protocol-relative (`//images.ctfassets.net/...`).
pub fn absolute_image_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(json: Value) -> EntryCollection {
        serde_json::from_value(json).expect("valid collection")
    }

    #[test]
    fn protocol_relative_url_gets_https_prefix() {
        assert_eq!(
            absolute_image_url("//images.ctfassets.net/s/lamp.png"),
            "https://images.ctfassets.net/s/lamp.png"
        );
        assert_eq!(
            absolute_image_url("https://cdn.example.com/lamp.png"),
            "https://cdn.example.com/lamp.png"
        );
    }

    #[test]
    fn product_resolves_linked_asset() {
        let collection = collection(serde_json::json!({
            "items": [{
                "sys": { "id": "entry-1" },
                "fields": {
                    "name": "Desk Lamp",
                    "slug": "desk-lamp",
                    "description": "Warm light.",
                    "image": { "sys": { "type": "Link", "linkType": "Asset", "id": "asset-9" } }
                }
            }],
            "includes": {
                "Asset": [{
                    "sys": { "id": "asset-9" },
                    "fields": { "file": { "url": "//images.ctfassets.net/s/lamp.png" } }
                }]
            }
        }));

        let products = collection.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Desk Lamp");
        assert_eq!(products[0].slug, "desk-lamp");
        assert_eq!(
            products[0].image_url.as_deref(),
            Some("https://images.ctfassets.net/s/lamp.png")
        );
    }

    #[test]
    fn embedded_asset_is_read_directly() {
        let collection = collection(serde_json::json!({
            "items": [{
                "sys": { "id": "entry-1" },
                "fields": {
                    "slug": "chair",
                    "image": { "fields": { "file": { "url": "//img/chair.png" } } }
                }
            }]
        }));
        let product = collection.product(&collection.items[0]).unwrap();
        assert_eq!(product.image_url.as_deref(), Some("https://img/chair.png"));
        assert_eq!(product.name, "");
    }

    #[test]
    fn missing_or_dangling_image_is_tolerated() {
        let collection = collection(serde_json::json!({
            "items": [
                { "sys": { "id": "a" }, "fields": { "slug": "no-image", "name": "A" } },
                {
                    "sys": { "id": "b" },
                    "fields": { "slug": "dangling", "image": { "sys": { "id": "gone" } } }
                }
            ]
        }));
        let products = collection.products();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.image_url.is_none()));
    }

    #[test]
    fn entries_without_slug_are_not_products() {
        let collection = collection(serde_json::json!({
            "items": [{ "sys": { "id": "a" }, "fields": { "name": "Banner" } }]
        }));
        assert!(collection.products().is_empty());
    }

    #[test]
    fn debug_entries_default_missing_fields() {
        let collection = collection(serde_json::json!({
            "items": [
                { "sys": { "id": "a" }, "fields": {} },
                { "sys": { "id": "b" }, "fields": { "name": "Lamp", "slug": "lamp", "description": "d" } }
            ]
        }));
        let entries = collection.debug_entries();
        assert_eq!(
            entries[0],
            DebugEntry {
                id: "a".to_string(),
                name: "Unnamed".to_string(),
                slug: String::new(),
                description: String::new(),
            }
        );
        assert_eq!(entries[1].name, "Lamp");
        assert_eq!(entries[1].slug, "lamp");
    }
}
