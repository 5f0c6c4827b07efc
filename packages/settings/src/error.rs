// ABOUTME: Error types for settings synchronization
// ABOUTME: Separates session expiry from section-local write failures

use sitepanel_core::{PathError, Section};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("No settings document is loaded")]
    NoDocument,

    #[error("Settings store has not been initialized")]
    NotInitialized,

    #[error(transparent)]
    InvalidField(#[from] PathError),

    /// The remote API rejected the bearer token; the session must end
    #[error("Session expired")]
    SessionExpired,

    #[error("Failed to save {section} settings: {reason}")]
    WriteFailed { section: Section, reason: String },
}

impl SyncError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, SyncError::SessionExpired)
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
