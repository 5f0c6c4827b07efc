pub mod ads;
pub mod css;
pub mod session;
pub mod settings;

use colored::*;

use sitepanel_auth::{AuthError, AuthResult, SessionNotice};
use sitepanel_core::Section;

/// Print the per-section save message and turn failures into CLI errors
pub fn report_save<T>(section: Section, result: AuthResult<T>) -> anyhow::Result<T> {
    match result {
        Ok(value) => {
            println!("{} {}", "✓".green().bold(), section.success_message());
            Ok(value)
        }
        Err(AuthError::SessionExpired) => {
            anyhow::bail!("{}", SessionNotice::SessionExpired.message())
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), section.failure_message());
            Err(e.into())
        }
    }
}
