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

//! Shopper side of a product page call.
//!
//! ```text
//! Browsing --join--> Joining --> InCall --end_call--> Feedback --submit--> Browsing
//!     \__________________ teardown (from any state) __________________/--> Unmounted
//! ```

use std::sync::Arc;

use expert_call_types::Product;

use crate::error::SessionError;
use crate::feedback::{Feedback, FeedbackSink};
use crate::identity::IdentityProvider;
use crate::presence::RemotePresence;
use crate::rooms::RoomProvisioner;
use crate::session::{ActiveSession, Released};
use crate::video::VideoConnector;

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

/// Observable phase of a [`ShopperSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopperState {
    Browsing,
    Joining,
    InCall,
    Feedback { rating: Option<u8> },
    Unmounted,
}

#[derive(Debug)]
struct PendingFeedback {
    call_id: String,
    user_id: String,
    rating: Option<u8>,
}

#[derive(Debug)]
enum Phase {
    Browsing,
    Joining,
    InCall(ActiveSession),
    Feedback(PendingFeedback),
    Unmounted,
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Browsing => "browsing",
            Phase::Joining => "joining",
            Phase::InCall(_) => "in a call",
            Phase::Feedback(_) => "collecting feedback",
            Phase::Unmounted => "unmounted",
        }
    }
}

/// One shopper's visit to a product page.
pub struct ShopperSession {
    product: Product,
    provisioner: Arc<dyn RoomProvisioner>,
    connector: Arc<dyn VideoConnector>,
    identity: Arc<dyn IdentityProvider>,
    feedback: Arc<dyn FeedbackSink>,
    phase: Phase,
}

impl ShopperSession {
    pub fn new(
        product: Product,
        provisioner: Arc<dyn RoomProvisioner>,
        connector: Arc<dyn VideoConnector>,
        identity: Arc<dyn IdentityProvider>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Self {
        Self {
            product,
            provisioner,
            connector,
            identity,
            feedback,
            phase: Phase::Browsing,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn state(&self) -> ShopperState {
        match &self.phase {
            Phase::Browsing => ShopperState::Browsing,
            Phase::Joining => ShopperState::Joining,
            Phase::InCall(_) => ShopperState::InCall,
            Phase::Feedback(pending) => ShopperState::Feedback {
                rating: pending.rating,
            },
            Phase::Unmounted => ShopperState::Unmounted,
        }
    }

    /// The live call, while in one.
    pub fn active(&self) -> Option<&ActiveSession> {
        match &self.phase {
            Phase::InCall(session) => Some(session),
            _ => None,
        }
    }

    /// Expert presence for the banner, while in a call.
    pub fn presence(&self) -> Option<RemotePresence> {
        self.active().map(ActiveSession::presence)
    }

    /// Request a room for this product and join it, creating it if needed.
    ///
    /// On failure the session returns to `Browsing` with nothing held. If a
    /// previous `join` future was dropped mid-flight the session is still in
    /// `Joining` (its connection already released on drop) and may join again.
    pub async fn join(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Browsing | Phase::Joining) {
            return Err(self.invalid("join"));
        }
        self.phase = Phase::Joining;

        match self.open_call().await {
            Ok(session) => {
                self.phase = Phase::InCall(session);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to join call for {}: {e}", self.product.slug);
                self.phase = Phase::Browsing;
                Err(e)
            }
        }
    }

    async fn open_call(&self) -> Result<ActiveSession, SessionError> {
        let user = self.identity.caller();
        let credentials = self
            .provisioner
            .create_room(&self.product.slug, &user.id)
            .await?;
        let session =
            ActiveSession::open(self.connector.as_ref(), &credentials, user, true).await?;
        Ok(session)
    }

    /// Leave the call and move to the rating prompt.
    ///
    /// The session is in `Feedback` once this returns, whatever the release
    /// outcome.
    pub async fn end_call(&mut self) -> Result<Released, SessionError> {
        let session = match std::mem::replace(&mut self.phase, Phase::Joining) {
            Phase::InCall(session) => session,
            other => {
                self.phase = other;
                return Err(self.invalid("end call"));
            }
        };

        self.phase = Phase::Feedback(PendingFeedback {
            call_id: session.call().call_id.clone(),
            user_id: session.user().id.clone(),
            rating: None,
        });
        Ok(session.close().await)
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<(), SessionError> {
        let invalid = self.invalid("rate");
        let Phase::Feedback(pending) = &mut self.phase else {
            return Err(invalid);
        };
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(SessionError::InvalidRating(rating));
        }
        pending.rating = Some(rating);
        Ok(())
    }

    /// Send the chosen rating and return to `Browsing`.
    ///
    /// Without a rating nothing is sent. A sink failure is logged and the
    /// session still returns to `Browsing`.
    pub async fn submit_feedback(&mut self) -> Result<Option<Feedback>, SessionError> {
        let pending = match std::mem::replace(&mut self.phase, Phase::Browsing) {
            Phase::Feedback(pending) => pending,
            other => {
                self.phase = other;
                return Err(self.invalid("submit feedback"));
            }
        };

        let Some(rating) = pending.rating else {
            log::info!("Feedback dismissed without a rating");
            return Ok(None);
        };
        let feedback = Feedback {
            call_id: pending.call_id,
            user_id: pending.user_id,
            rating,
        };
        if let Err(e) = self.feedback.submit(&feedback).await {
            log::error!("Failed to submit feedback for {}: {e}", feedback.call_id);
        }
        Ok(Some(feedback))
    }

    /// Release any live call and stop. Never fails.
    pub async fn teardown(&mut self) -> Option<Released> {
        match std::mem::replace(&mut self.phase, Phase::Unmounted) {
            Phase::InCall(session) => Some(session.close().await),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            state: self.phase.name(),
        }
    }
}
