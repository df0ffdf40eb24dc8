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

//! Axum router configuration for the Room API.

pub mod feedback;
pub mod products;
pub mod rooms;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::method_not_allowed;
use crate::state::AppState;

/// Build the full application router.
///
/// Every route answers unsupported methods with `405 {"message": ...}`.
pub fn router() -> Router<AppState> {
    Router::new()
        // Room provisioning
        .route(
            "/api/create-room",
            post(rooms::create_room).fallback(method_not_allowed),
        )
        // Product content
        .route(
            "/api/products",
            get(products::list_products).fallback(method_not_allowed),
        )
        .route(
            "/api/products/{slug}",
            get(products::get_product).fallback(method_not_allowed),
        )
        .route(
            "/api/debug/entries",
            get(products::debug_entries).fallback(method_not_allowed),
        )
        // Post-call feedback
        .route(
            "/api/feedback",
            post(feedback::submit_feedback).fallback(method_not_allowed),
        )
}
