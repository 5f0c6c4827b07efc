use std::env;
use std::path::PathBuf;

/// Storage key for the last successfully fetched settings document
pub const SETTINGS_STORAGE_KEY: &str = "adminSettings";

/// Storage key for the operator's bearer token
pub const TOKEN_STORAGE_KEY: &str = "adminToken";

/// Identifier of the single injected style block carrying `customCSS`
pub const CUSTOM_CSS_BLOCK_ID: &str = "custom-admin-css";

/// Get the path to the Sitepanel directory (~/.sitepanel)
pub fn sitepanel_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".sitepanel")
    } else {
        // Fall back to dirs crate, then the working directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sitepanel")
    }
}
