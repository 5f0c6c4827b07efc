// ABOUTME: CLI commands for the operator session
// ABOUTME: Interactive login, logout and a status overview

use colored::*;
use inquire::{Password, PasswordDisplayMode, Text};

use sitepanel_auth::{AuthError, SessionNotice, SessionState};
use sitepanel_cli::render::{ad_summary, describe_outcome};
use sitepanel_cli::AppContext;

pub async fn login_command(
    ctx: &AppContext,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Text::new("Username:").prompt()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    };

    match ctx.session.login(&username, &password).await {
        Ok(()) => {}
        Err(AuthError::LoginFailed(_)) => {
            anyhow::bail!("{}", SessionNotice::LoginFailed.message())
        }
        Err(e) => return Err(e.into()),
    }
    println!("{} Logged in as {}", "✓".green().bold(), username.bold());

    let outcome = ctx.session.load_settings().await?;
    println!("  Settings {}", describe_outcome(outcome));
    if let Some(doc) = ctx.store.document().await {
        println!("  {}", ad_summary(&doc.ads));
    }
    Ok(())
}

pub async fn logout_command(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    println!("{} Logged out", "✓".green().bold());
    Ok(())
}

pub async fn status_command(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", "Sitepanel Status".bold());
    println!("  API:      {}", ctx.config.api_url.cyan());
    println!("  Data dir: {}", ctx.config.data_dir.display());

    let state = ctx.session.restore().await?;
    let state_label = match state {
        SessionState::Authenticated => state.to_string().green(),
        _ => state.to_string().yellow(),
    };
    println!("  Session:  {}", state_label);

    if let Some(notice) = ctx.session.take_notice().await {
        println!("  {}", notice.message().red());
    }
    if let Some(error) = ctx.store.last_error().await {
        println!("  {}", error.red());
    }

    if let Some(doc) = ctx.store.document().await {
        let bar = &doc.appearance.announcement_bar;
        println!();
        println!(
            "  Announcement: {}",
            if bar.enabled { "on".green() } else { "off".dimmed() }
        );
        println!(
            "  Social buttons: {}",
            if doc.appearance.floating_social_buttons.enabled {
                "on".green()
            } else {
                "off".dimmed()
            }
        );
        println!("  Custom CSS: {} bytes", doc.appearance.custom_css.len());
        println!("  {}", ad_summary(&doc.ads));
    }
    Ok(())
}
