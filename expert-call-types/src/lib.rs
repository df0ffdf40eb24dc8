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

//! Shared wire types for the product expert call backend.
//!
//! This crate defines the contract between the room API server and its
//! consumers (the session client, product pages, integration tests).
//! It is intentionally framework-agnostic: no axum, no reqwest, no SDK types.

pub mod error;
pub mod product;
pub mod requests;
pub mod responses;
pub mod room;
pub mod token;

pub use error::ErrorMessage;
pub use product::{DebugEntry, Product};
pub use requests::{CreateRoomRequest, FeedbackRequest};
pub use responses::{CreateRoomResponse, FeedbackAck, ProductSlugsResponse, SessionCredentials};
pub use room::{call_id_for, CallRef, CALL_TYPE};
pub use token::UserTokenClaims;
