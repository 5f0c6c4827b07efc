// ABOUTME: Sitepanel operator session library
// ABOUTME: Login/logout lifecycle, token ownership and forced logout on auth failures

pub mod controller;
pub mod error;
pub mod session;

// Re-export main types
pub use controller::SessionController;
pub use error::{AuthError, AuthResult};
pub use session::{SessionEvent, SessionMachine, SessionNotice, SessionState, SessionTransition};
