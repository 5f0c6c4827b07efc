// ABOUTME: CLI commands for operator custom CSS
// ABOUTME: Replace from a file, clear, or preview the injected style block

use anyhow::Context;
use clap::Subcommand;
use serde_json::Value;
use std::path::PathBuf;

use sitepanel_core::Section;
use sitepanel_cli::AppContext;

use super::report_save;

#[derive(Debug, Subcommand)]
pub enum CssCommands {
    /// Replace the custom CSS with the contents of a file
    Set {
        /// CSS file to upload
        file: PathBuf,
    },
    /// Remove all custom CSS
    Clear,
    /// Print the style block the live page would carry
    Preview,
}

pub async fn handle_css_command(ctx: &AppContext, command: CssCommands) -> anyhow::Result<()> {
    ctx.require_session().await?;

    let css = match command {
        CssCommands::Preview => {
            print!("{}", ctx.head.render_html());
            return Ok(());
        }
        CssCommands::Set { file } => tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?,
        CssCommands::Clear => String::new(),
    };

    ctx.store
        .update_field(Section::Css, "", Value::String(css))
        .await?;
    report_save(Section::Css, ctx.session.commit_section(Section::Css).await)?;
    Ok(())
}
