// ABOUTME: Error types for operator session management
// ABOUTME: Login failures, invalid lifecycle transitions and session expiry

use thiserror::Error;

use sitepanel_settings::SyncError;
use sitepanel_storage::StorageError;

use crate::session::{SessionEvent, SessionState};

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("A login attempt is already in progress")]
    LoginInProgress,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session transition: from {from:?} using event {event:?}")]
    InvalidTransition {
        from: SessionState,
        event: SessionEvent,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Sync(SyncError),
}

impl From<SyncError> for AuthError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::SessionExpired => AuthError::SessionExpired,
            other => AuthError::Sync(other),
        }
    }
}
