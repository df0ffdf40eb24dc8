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

//! Whether the other side of the call has arrived.

use crate::video::Participant;

/// Presence of the counterpart, inferred from remote participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePresence {
    Waiting,
    Joined,
}

impl RemotePresence {
    pub fn from_remote_count(remote: usize) -> Self {
        if remote == 0 {
            Self::Waiting
        } else {
            Self::Joined
        }
    }

    /// Counts participants whose session differs from the local one. Before
    /// the local session id is known every participant counts as remote.
    pub fn from_participants(participants: &[Participant], local_session_id: Option<&str>) -> Self {
        Self::from_remote_count(remote_count(participants, local_session_id))
    }

    /// Banner shown to the shopper while in the call.
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting for expert to join…",
            Self::Joined => "✅ Expert has joined!",
        }
    }
}

pub(crate) fn remote_count(participants: &[Participant], local_session_id: Option<&str>) -> usize {
    participants
        .iter()
        .filter(|p| Some(p.session_id.as_str()) != local_session_id)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(session_id: &str) -> Participant {
        Participant {
            session_id: session_id.to_string(),
            user_id: format!("u-{session_id}"),
        }
    }

    #[test]
    fn alone_in_call_is_waiting() {
        let presence = RemotePresence::from_participants(&[participant("local")], Some("local"));
        assert_eq!(presence, RemotePresence::Waiting);
        assert_eq!(presence.banner(), "Waiting for expert to join…");
    }

    #[test]
    fn any_remote_participant_is_joined() {
        let participants = [participant("local"), participant("expert")];
        let presence = RemotePresence::from_participants(&participants, Some("local"));
        assert_eq!(presence, RemotePresence::Joined);
        assert_eq!(presence.banner(), "✅ Expert has joined!");
    }

    #[test]
    fn several_remotes_are_still_joined() {
        assert_eq!(RemotePresence::from_remote_count(3), RemotePresence::Joined);
    }

    #[test]
    fn unknown_local_session_counts_everyone() {
        let presence = RemotePresence::from_participants(&[participant("local")], None);
        assert_eq!(presence, RemotePresence::Joined);
    }
}
