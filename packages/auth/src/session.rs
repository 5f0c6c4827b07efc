// ABOUTME: Operator session lifecycle state machine
// ABOUTME: Transition table, recorded history and user-facing session notices

use std::fmt;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Anonymous => "anonymous",
            SessionState::Authenticating => "authenticating",
            SessionState::Authenticated => "authenticated",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoginStarted,
    LoginSucceeded,
    LoginFailed,
    /// A persisted token was picked up at startup
    Restored,
    Logout,
    /// An authenticated call was rejected mid-session
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTransition {
    pub from: SessionState,
    pub event: SessionEvent,
    pub to: SessionState,
}

#[derive(Debug, Default)]
pub struct SessionMachine {
    state: SessionState,
    history: Vec<SessionTransition>,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &[SessionTransition] {
        &self.history
    }

    pub fn can_transition(&self, event: SessionEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: SessionEvent) -> Option<SessionState> {
        use SessionEvent::*;
        use SessionState::*;
        match (self.state, event) {
            (Anonymous, LoginStarted) => Some(Authenticating),
            (Anonymous, Restored) => Some(Authenticated),
            (Authenticating, LoginSucceeded) => Some(Authenticated),
            (Authenticating, LoginFailed) => Some(Anonymous),
            (Authenticated, Logout) => Some(Anonymous),
            (Authenticated, Expired) => Some(Anonymous),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: SessionEvent) -> AuthResult<SessionState> {
        tracing::debug!(from = ?self.state, event = ?event, "request session transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid session transition requested");
            AuthError::InvalidTransition { from, event }
        })?;

        self.history.push(SessionTransition {
            from: self.state,
            event,
            to: next,
        });
        self.state = next;

        Ok(self.state)
    }
}

/// Session-level message for the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionNotice {
    LoginFailed,
    SessionExpired,
}

impl SessionNotice {
    pub fn message(&self) -> &'static str {
        match self {
            SessionNotice::LoginFailed => "Login failed. Please check your credentials.",
            SessionNotice::SessionExpired => "Your session has expired. Please log in again.",
        }
    }
}

impl fmt::Display for SessionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn can_transition_tracks_valid_and_invalid_events() {
        let mut machine = SessionMachine::new();
        assert!(machine.can_transition(SessionEvent::LoginStarted));
        assert!(machine.can_transition(SessionEvent::Restored));
        assert!(!machine.can_transition(SessionEvent::Logout));
        assert!(!machine.can_transition(SessionEvent::LoginSucceeded));

        machine
            .transition(SessionEvent::LoginStarted)
            .expect("anonymous -> authenticating should transition");

        assert!(!machine.can_transition(SessionEvent::LoginStarted));
        assert!(machine.can_transition(SessionEvent::LoginSucceeded));
        assert!(machine.can_transition(SessionEvent::LoginFailed));
    }

    #[test]
    fn failed_login_returns_to_anonymous_and_can_retry() {
        let mut machine = SessionMachine::new();
        machine.transition(SessionEvent::LoginStarted).unwrap();
        machine.transition(SessionEvent::LoginFailed).unwrap();
        assert_eq!(machine.state(), SessionState::Anonymous);

        machine.transition(SessionEvent::LoginStarted).unwrap();
        machine.transition(SessionEvent::LoginSucceeded).unwrap();
        assert_eq!(machine.state(), SessionState::Authenticated);
    }

    #[test]
    fn transition_records_history_in_order() {
        let mut machine = SessionMachine::new();
        machine.transition(SessionEvent::LoginStarted).unwrap();
        machine.transition(SessionEvent::LoginSucceeded).unwrap();
        machine.transition(SessionEvent::Expired).unwrap();

        assert_eq!(
            machine.history(),
            &[
                SessionTransition {
                    from: SessionState::Anonymous,
                    event: SessionEvent::LoginStarted,
                    to: SessionState::Authenticating,
                },
                SessionTransition {
                    from: SessionState::Authenticating,
                    event: SessionEvent::LoginSucceeded,
                    to: SessionState::Authenticated,
                },
                SessionTransition {
                    from: SessionState::Authenticated,
                    event: SessionEvent::Expired,
                    to: SessionState::Anonymous,
                },
            ]
        );
    }

    #[test]
    fn invalid_transition_keeps_state() {
        let mut machine = SessionMachine::new();
        let err = machine.transition(SessionEvent::Logout).unwrap_err();

        assert!(matches!(
            err,
            AuthError::InvalidTransition {
                from: SessionState::Anonymous,
                event: SessionEvent::Logout
            }
        ));
        assert_eq!(machine.state(), SessionState::Anonymous);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn notices_are_distinct() {
        assert_ne!(
            SessionNotice::LoginFailed.message(),
            SessionNotice::SessionExpired.message()
        );
        assert_eq!(
            SessionNotice::SessionExpired.to_string(),
            "Your session has expired. Please log in again."
        );
    }
}
