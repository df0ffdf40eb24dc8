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

//! In-memory fakes for the session collaborators.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use expert_call_types::{call_id_for, CallRef, SessionCredentials};

use crate::error::{ApiError, VideoError};
use crate::feedback::{Feedback, FeedbackSink};
use crate::rooms::RoomProvisioner;
use crate::video::{CallUser, Participant, VideoConnection, VideoConnector};

pub const TEST_API_KEY: &str = "test-api-key";

pub fn credentials(product_slug: &str) -> SessionCredentials {
    SessionCredentials {
        call_id: call_id_for(product_slug),
        token: "test-token".to_string(),
        api_key: TEST_API_KEY.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEvent {
    Connect(String),
    Join(String, bool),
    Leave(String),
    Disconnect,
}

#[derive(Default)]
struct FakeVideoState {
    events: Vec<VideoEvent>,
    participants: Vec<Participant>,
    local_session: Option<String>,
}

/// Records every platform call and keeps a shared participant list.
#[derive(Clone, Default)]
pub struct FakeConnector {
    state: Arc<Mutex<FakeVideoState>>,
    fail_connect: bool,
    fail_join: bool,
    hang_join: bool,
    fail_leave: bool,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    pub fn failing_join(mut self) -> Self {
        self.fail_join = true;
        self
    }

    /// `join` records the attempt and then never resolves.
    pub fn hanging_join(mut self) -> Self {
        self.hang_join = true;
        self
    }

    pub fn failing_leave(mut self) -> Self {
        self.fail_leave = true;
        self
    }

    pub fn events(&self) -> Vec<VideoEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn add_remote(&self, session_id: &str, user_id: &str) {
        self.state.lock().unwrap().participants.push(Participant {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
        });
    }

    pub fn remove_remote(&self, session_id: &str) {
        self.state
            .lock()
            .unwrap()
            .participants
            .retain(|p| p.session_id != session_id);
    }

    /// Waits up to one second for `event` to be recorded.
    pub async fn wait_for(&self, event: VideoEvent) {
        self.wait_for_count(event, 1).await;
    }

    /// Waits up to one second for `event` to be recorded `count` times.
    pub async fn wait_for_count(&self, event: VideoEvent, count: usize) {
        for _ in 0..100 {
            if self.events().iter().filter(|e| **e == event).count() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("timed out waiting for {count} x {event:?}; saw {:?}", self.events());
    }
}

#[async_trait]
impl VideoConnector for FakeConnector {
    async fn connect_user(
        &self,
        _credentials: &SessionCredentials,
        user: &CallUser,
    ) -> Result<Box<dyn VideoConnection>, VideoError> {
        if self.fail_connect {
            return Err(VideoError::Connect("connection refused".into()));
        }
        self.state
            .lock()
            .unwrap()
            .events
            .push(VideoEvent::Connect(user.id.clone()));
        Ok(Box::new(FakeConnection {
            state: self.state.clone(),
            user_id: user.id.clone(),
            fail_join: self.fail_join,
            hang_join: self.hang_join,
            fail_leave: self.fail_leave,
        }))
    }
}

struct FakeConnection {
    state: Arc<Mutex<FakeVideoState>>,
    user_id: String,
    fail_join: bool,
    hang_join: bool,
    fail_leave: bool,
}

#[async_trait]
impl VideoConnection for FakeConnection {
    async fn join(&self, call: &CallRef, create: bool) -> Result<(), VideoError> {
        self.state
            .lock()
            .unwrap()
            .events
            .push(VideoEvent::Join(call.call_id.clone(), create));
        if self.hang_join {
            std::future::pending::<()>().await;
        }

        let mut state = self.state.lock().unwrap();
        if self.fail_join {
            return Err(VideoError::Join("call not found".into()));
        }
        let session_id = format!("session-{}", self.user_id);
        state.participants.push(Participant {
            session_id: session_id.clone(),
            user_id: self.user_id.clone(),
        });
        state.local_session = Some(session_id);
        Ok(())
    }

    async fn leave(&self, call: &CallRef) -> Result<(), VideoError> {
        let mut state = self.state.lock().unwrap();
        state.events.push(VideoEvent::Leave(call.call_id.clone()));
        if self.fail_leave {
            return Err(VideoError::Leave("already left".into()));
        }
        let local = state.local_session.take();
        state
            .participants
            .retain(|p| Some(&p.session_id) != local.as_ref());
        Ok(())
    }

    async fn disconnect_user(&self) -> Result<(), VideoError> {
        self.state
            .lock()
            .unwrap()
            .events
            .push(VideoEvent::Disconnect);
        Ok(())
    }

    fn participants(&self, _call: &CallRef) -> Vec<Participant> {
        self.state.lock().unwrap().participants.clone()
    }

    fn local_session_id(&self, _call: &CallRef) -> Option<String> {
        self.state.lock().unwrap().local_session.clone()
    }
}

/// Hands out credentials for `product-<slug>` and records each request.
#[derive(Default)]
pub struct FakeProvisioner {
    requests: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl FakeProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoomProvisioner for FakeProvisioner {
    async fn create_room(
        &self,
        product_slug: &str,
        user_id: &str,
    ) -> Result<SessionCredentials, ApiError> {
        self.requests
            .lock()
            .unwrap()
            .push((product_slug.to_string(), user_id.to_string()));
        if self.fail {
            return Err(ApiError::ServerError {
                status: 500,
                body: "Internal Server Error".into(),
            });
        }
        Ok(credentials(product_slug))
    }
}

/// Collects submitted feedback.
#[derive(Default)]
pub struct RecordingFeedbackSink {
    submitted: Mutex<Vec<Feedback>>,
    fail: bool,
}

impl RecordingFeedbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn submitted(&self) -> Vec<Feedback> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackSink for RecordingFeedbackSink {
    async fn submit(&self, feedback: &Feedback) -> Result<(), ApiError> {
        self.submitted.lock().unwrap().push(feedback.clone());
        if self.fail {
            return Err(ApiError::MethodNotAllowed);
        }
        Ok(())
    }
}
