// ABOUTME: CLI commands for reading and editing settings
// ABOUTME: Show, explicit field set-and-save, and auto-saving toggles

use anyhow::Context;
use clap::Subcommand;
use colored::*;

use sitepanel_core::{AdSlotKey, Section};
use sitepanel_cli::render::{describe_outcome, parse_switch, parse_value};
use sitepanel_cli::AppContext;
use sitepanel_settings::{LoadOutcome, SyncMode, Toggle};

use super::report_save;

#[derive(Debug, Subcommand)]
pub enum ToggleCommands {
    /// Announcement bar
    Announcement {
        /// on or off
        state: String,
    },
    /// Floating social buttons
    Social {
        /// on or off
        state: String,
    },
    /// One ad placement
    Ad {
        /// Slot key, e.g. mainPageAd1
        slot: String,
        /// on or off
        state: String,
    },
}

pub async fn show_command(ctx: &AppContext, public: bool) -> anyhow::Result<()> {
    if public {
        let outcome = ctx.store.initialize(SyncMode::Public).await?;
        eprintln!("{} Settings {}", "ℹ".cyan(), describe_outcome(outcome));
        if outcome == LoadOutcome::Unavailable {
            anyhow::bail!("{}", sitepanel_settings::SETTINGS_UNAVAILABLE);
        }
    } else {
        ctx.require_session().await?;
    }

    let doc = ctx
        .store
        .document()
        .await
        .context("No settings document loaded")?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

pub async fn set_command(
    ctx: &AppContext,
    section: &str,
    path: &str,
    value: &str,
) -> anyhow::Result<()> {
    let section: Section = section.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    ctx.require_session().await?;

    ctx.store
        .update_field(section, path, parse_value(value))
        .await?;
    report_save(section, ctx.session.commit_section(section).await)
}

pub async fn toggle_command(ctx: &AppContext, command: ToggleCommands) -> anyhow::Result<()> {
    let (toggle, state) = match command {
        ToggleCommands::Announcement { state } => (Toggle::Announcement, state),
        ToggleCommands::Social { state } => (Toggle::SocialButtons, state),
        ToggleCommands::Ad { slot, state } => {
            let key: AdSlotKey = slot.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            (Toggle::AdSlot(key), state)
        }
    };
    let value = parse_switch(&state)?;
    ctx.require_session().await?;

    report_save(toggle.section(), ctx.session.toggle(toggle, value).await)
}
