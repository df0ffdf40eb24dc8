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

//! Client surface of the external video platform.
//!
//! Media, signaling and reconnection all live behind these traits; the
//! sessions only sequence connect, join, leave and disconnect and read the
//! participant list.

use async_trait::async_trait;
use expert_call_types::{CallRef, SessionCredentials};

use crate::error::VideoError;

/// The user a client connects as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallUser {
    pub id: String,
    pub name: String,
}

impl CallUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One participant in a call as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Per-connection id; the same user joining twice has two.
    pub session_id: String,
    pub user_id: String,
}

/// Opens authenticated connections to the video platform.
#[async_trait]
pub trait VideoConnector: Send + Sync {
    /// Authenticate `user` with the issued credentials.
    async fn connect_user(
        &self,
        credentials: &SessionCredentials,
        user: &CallUser,
    ) -> Result<Box<dyn VideoConnection>, VideoError>;
}

/// An authenticated platform connection.
#[async_trait]
pub trait VideoConnection: Send + Sync {
    /// Join `call`. With `create`, the call is created if it does not exist.
    async fn join(&self, call: &CallRef, create: bool) -> Result<(), VideoError>;

    async fn leave(&self, call: &CallRef) -> Result<(), VideoError>;

    async fn disconnect_user(&self) -> Result<(), VideoError>;

    /// Everyone currently in `call`, the local user included.
    fn participants(&self, call: &CallRef) -> Vec<Participant>;

    /// This connection's session id in `call`, once joined.
    fn local_session_id(&self, call: &CallRef) -> Option<String>;
}
