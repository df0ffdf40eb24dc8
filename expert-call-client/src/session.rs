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

//! A joined call and the platform connection behind it.
//!
//! [`ActiveSession`] owns the connection for exactly as long as the caller is
//! in the call. Closing it leaves the call and disconnects the user; dropping
//! it without closing schedules the same release on the current tokio runtime
//! so a torn-down page never leaks a connection.

use expert_call_types::{CallRef, SessionCredentials};

use crate::error::VideoError;
use crate::presence::{remote_count, RemotePresence};
use crate::video::{CallUser, VideoConnection, VideoConnector};

/// Outcome of releasing a session. Failures are logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub left: bool,
    pub disconnected: bool,
}

/// A connected and joined call.
///
/// The connection is owned from the moment `connect_user` returns, so a join
/// that is cancelled partway still disconnects on drop.
pub struct ActiveSession {
    call: CallRef,
    user: CallUser,
    connection: Option<Box<dyn VideoConnection>>,
    joined: bool,
}

impl std::fmt::Debug for ActiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveSession")
            .field("call", &self.call)
            .field("user", &self.user)
            .field("connected", &self.connection.is_some())
            .field("joined", &self.joined)
            .finish()
    }
}

impl ActiveSession {
    /// Connect `user` with `credentials` and join the room they name.
    ///
    /// A connection whose join fails is disconnected before the error is
    /// returned. If this future is dropped after connecting, the connection is
    /// disconnected in the background.
    pub async fn open(
        connector: &dyn VideoConnector,
        credentials: &SessionCredentials,
        user: CallUser,
        create: bool,
    ) -> Result<Self, VideoError> {
        let call = CallRef::new(credentials.call_id.clone());
        let connection = connector.connect_user(credentials, &user).await?;
        let mut session = Self {
            call,
            user,
            connection: Some(connection),
            joined: false,
        };

        if let Err(e) = session.join(create).await {
            if let Some(connection) = session.connection.take() {
                if let Err(disconnect_err) = connection.disconnect_user().await {
                    log::warn!(
                        "Failed to disconnect after join error on {}: {disconnect_err}",
                        session.call
                    );
                }
            }
            return Err(e);
        }

        log::info!("{} joined {}", session.user.id, session.call);
        Ok(session)
    }

    async fn join(&mut self, create: bool) -> Result<(), VideoError> {
        if let Some(connection) = self.connection.as_deref() {
            connection.join(&self.call, create).await?;
            self.joined = true;
        }
        Ok(())
    }

    pub fn call(&self) -> &CallRef {
        &self.call
    }

    pub fn user(&self) -> &CallUser {
        &self.user
    }

    /// Participants other than this connection.
    pub fn remote_participant_count(&self) -> usize {
        let Some(connection) = self.connection.as_ref() else {
            return 0;
        };
        let participants = connection.participants(&self.call);
        let local = connection.local_session_id(&self.call);
        remote_count(&participants, local.as_deref())
    }

    pub fn presence(&self) -> RemotePresence {
        RemotePresence::from_remote_count(self.remote_participant_count())
    }

    /// Leave the call, then disconnect the user.
    pub async fn close(mut self) -> Released {
        match self.connection.take() {
            Some(connection) => release(connection, &self.call, self.joined).await,
            None => Released {
                left: false,
                disconnected: false,
            },
        }
    }
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        let Some(connection) = self.connection.take() else {
            return;
        };
        let call = self.call.clone();
        let joined = self.joined;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    release(connection, &call, joined).await;
                });
            }
            Err(_) => {
                log::warn!("No runtime to release {call}; connection dropped without leaving");
            }
        }
    }
}

/// Leave (only if the join completed), then disconnect.
async fn release(connection: Box<dyn VideoConnection>, call: &CallRef, joined: bool) -> Released {
    let left = joined
        && match connection.leave(call).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to leave {call}: {e}");
                false
            }
        };
    let disconnected = match connection.disconnect_user().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to disconnect from {call}: {e}");
            false
        }
    };
    Released { left, disconnected }
}
