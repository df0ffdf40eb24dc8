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

//! Expert side of a product page call.
//!
//! The expert page joins the product's room as soon as it opens, under the
//! fixed identity `expert-<slug>`. It never creates the room; a shopper has
//! to be there first.

use std::sync::Arc;

use crate::error::SessionError;
use crate::identity::{ExpertIdentity, IdentityProvider};
use crate::rooms::RoomProvisioner;
use crate::session::{ActiveSession, Released};
use crate::video::VideoConnector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpertState {
    Joining,
    InCall,
    Unmounted,
}

#[derive(Debug)]
enum Phase {
    Joining,
    InCall(ActiveSession),
    Unmounted,
}

pub struct ExpertSession {
    product_slug: String,
    provisioner: Arc<dyn RoomProvisioner>,
    connector: Arc<dyn VideoConnector>,
    identity: Arc<dyn IdentityProvider>,
    phase: Phase,
}

impl ExpertSession {
    /// A session for `product_slug` using the `expert-<slug>` identity.
    pub fn new(
        product_slug: &str,
        provisioner: Arc<dyn RoomProvisioner>,
        connector: Arc<dyn VideoConnector>,
    ) -> Self {
        let identity = Arc::new(ExpertIdentity::for_product(product_slug));
        Self::with_identity(product_slug, provisioner, connector, identity)
    }

    pub fn with_identity(
        product_slug: &str,
        provisioner: Arc<dyn RoomProvisioner>,
        connector: Arc<dyn VideoConnector>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            product_slug: product_slug.to_string(),
            provisioner,
            connector,
            identity,
            phase: Phase::Joining,
        }
    }

    pub fn product_slug(&self) -> &str {
        &self.product_slug
    }

    pub fn state(&self) -> ExpertState {
        match self.phase {
            Phase::Joining => ExpertState::Joining,
            Phase::InCall(_) => ExpertState::InCall,
            Phase::Unmounted => ExpertState::Unmounted,
        }
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        match &self.phase {
            Phase::InCall(session) => Some(session),
            _ => None,
        }
    }

    /// Shoppers currently in the room with the expert.
    pub fn remote_participant_count(&self) -> usize {
        self.active()
            .map(ActiveSession::remote_participant_count)
            .unwrap_or(0)
    }

    /// Join the existing product room.
    ///
    /// A failure leaves the session in `Joining`, ready to try again.
    pub async fn join(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::Joining) {
            return Err(self.invalid("join"));
        }

        let user = self.identity.caller();
        let credentials = self
            .provisioner
            .create_room(&self.product_slug, &user.id)
            .await
            .inspect_err(|e| log::error!("Expert could not get room credentials: {e}"))?;
        let session = ActiveSession::open(self.connector.as_ref(), &credentials, user, false)
            .await
            .inspect_err(|e| log::error!("Expert could not join {}: {e}", credentials.call_id))?;

        self.phase = Phase::InCall(session);
        Ok(())
    }

    /// Leave the call. The session is finished afterwards.
    pub async fn leave(&mut self) -> Result<Released, SessionError> {
        match std::mem::replace(&mut self.phase, Phase::Unmounted) {
            Phase::InCall(session) => Ok(session.close().await),
            other => {
                self.phase = other;
                Err(self.invalid("leave"))
            }
        }
    }

    /// Release any live call and stop. Never fails.
    pub async fn teardown(&mut self) -> Option<Released> {
        match std::mem::replace(&mut self.phase, Phase::Unmounted) {
            Phase::InCall(session) => Some(session.close().await),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        let state = match self.phase {
            Phase::Joining => "joining",
            Phase::InCall(_) => "in a call",
            Phase::Unmounted => "unmounted",
        };
        SessionError::InvalidTransition { action, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeConnector, FakeProvisioner, VideoEvent};
    use std::time::Duration;

    fn expert(provisioner: Arc<FakeProvisioner>, connector: &FakeConnector) -> ExpertSession {
        ExpertSession::new("desk-lamp", provisioner, Arc::new(connector.clone()))
    }

    #[tokio::test]
    async fn expert_joins_existing_room_with_slug_identity() {
        let provisioner = Arc::new(FakeProvisioner::new());
        let connector = FakeConnector::new();
        let mut session = expert(provisioner.clone(), &connector);
        assert_eq!(session.state(), ExpertState::Joining);

        session.join().await.unwrap();

        assert_eq!(session.state(), ExpertState::InCall);
        assert_eq!(
            provisioner.requests(),
            vec![("desk-lamp".to_string(), "expert-desk-lamp".to_string())]
        );
        assert_eq!(
            connector.events(),
            vec![
                VideoEvent::Connect("expert-desk-lamp".into()),
                VideoEvent::Join("product-desk-lamp".into(), false),
            ]
        );
        session.teardown().await;
    }

    #[tokio::test]
    async fn counts_shoppers_in_room() {
        let connector = FakeConnector::new();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);
        assert_eq!(session.remote_participant_count(), 0);

        session.join().await.unwrap();
        connector.add_remote("s-1", "user-one");
        connector.add_remote("s-2", "user-two");
        assert_eq!(session.remote_participant_count(), 2);
        session.teardown().await;
    }

    #[tokio::test]
    async fn failed_join_can_be_retried() {
        let connector = FakeConnector::new().failing_connect();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);

        let err = session.join().await.unwrap_err();
        assert!(matches!(err, SessionError::Video(_)));
        assert_eq!(session.state(), ExpertState::Joining);
    }

    #[tokio::test]
    async fn cancelled_join_disconnects_and_stays_joining() {
        let connector = FakeConnector::new().hanging_join();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);

        let attempt = tokio::time::timeout(Duration::from_millis(50), session.join()).await;
        assert!(attempt.is_err());
        assert_eq!(session.state(), ExpertState::Joining);
        connector.wait_for(VideoEvent::Disconnect).await;
    }

    #[tokio::test]
    async fn leave_releases_and_finishes() {
        let connector = FakeConnector::new();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);
        session.join().await.unwrap();

        let released = session.leave().await.unwrap();
        assert!(released.left && released.disconnected);
        assert_eq!(session.state(), ExpertState::Unmounted);
        assert!(session.leave().await.is_err());
    }

    #[tokio::test]
    async fn leave_before_join_is_invalid() {
        let connector = FakeConnector::new();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);
        assert!(matches!(
            session.leave().await,
            Err(SessionError::InvalidTransition { action: "leave", state: "joining" })
        ));
        assert_eq!(session.state(), ExpertState::Joining);
    }

    #[tokio::test]
    async fn teardown_releases_call() {
        let connector = FakeConnector::new();
        let mut session = expert(Arc::new(FakeProvisioner::new()), &connector);
        session.join().await.unwrap();

        assert!(session.teardown().await.is_some());
        assert_eq!(connector.events().last(), Some(&VideoEvent::Disconnect));
        assert_eq!(session.state(), ExpertState::Unmounted);
    }
}
