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

//! Room API library.
//!
//! This crate provides the Axum router, application state, and configuration
//! for the product expert call backend: room provisioning against the video
//! platform, product content from the CMS, and post-call feedback. The binary
//! entry point (`main.rs`) is a thin wrapper that calls into this library.

pub mod config;
pub mod content;
pub mod error;
pub mod feedback;
pub mod platform;
pub mod routes;
pub mod state;
pub mod token;
