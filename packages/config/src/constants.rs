// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Sitepanel

// Remote settings API
pub const SITEPANEL_API_URL: &str = "SITEPANEL_API_URL";
pub const SITEPANEL_HTTP_TIMEOUT_SECS: &str = "SITEPANEL_HTTP_TIMEOUT_SECS";
pub const SITEPANEL_HTTP_CONNECT_TIMEOUT_SECS: &str = "SITEPANEL_HTTP_CONNECT_TIMEOUT_SECS";

// Local persistence
pub const SITEPANEL_DATA_DIR: &str = "SITEPANEL_DATA_DIR";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
