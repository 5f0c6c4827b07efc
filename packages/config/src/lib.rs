// ABOUTME: Configuration for Sitepanel clients
// ABOUTME: Environment variable names and the validated client configuration

pub mod client;
pub mod constants;

pub use client::{ClientConfig, ConfigError, DEFAULT_API_URL};
