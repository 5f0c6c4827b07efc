//! Sitepanel Gateway Package
//!
//! Wraps every call to the remote settings API: login, public and operator
//! reads, and one write per settings section. Each call builds its own
//! request; nothing is retried here.

pub mod api;
pub mod client;
pub mod error;
pub mod gateway;

pub use api::{Ack, LoginRequest, LoginResponse};
pub use client::HttpSettingsGateway;
pub use error::{GatewayError, GatewayResult};
pub use gateway::SettingsGateway;
