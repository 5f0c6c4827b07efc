// ABOUTME: CLI commands for ad placements
// ABOUTME: Slot listing, bulk demo/disable templates and named template application

use clap::Subcommand;
use colored::*;

use sitepanel_core::{AdTemplate, BulkAdTemplate, Section, AD_TEMPLATES};
use sitepanel_cli::render::{ad_slot_lines, ad_summary, template_line};
use sitepanel_cli::AppContext;

use super::report_save;

#[derive(Debug, Subcommand)]
pub enum AdsCommands {
    /// List every ad slot
    List,
    /// Enable all slots with placeholder content
    EnableDemo,
    /// Disable all slots and clear their content
    DisableAll,
    /// List the available ad templates
    Templates,
    /// Put a template into the first disabled slot
    ApplyTemplate {
        /// Template name, e.g. "Tech" or "Tech Ad"
        name: String,
    },
}

pub async fn handle_ads_command(ctx: &AppContext, command: AdsCommands) -> anyhow::Result<()> {
    match command {
        AdsCommands::Templates => {
            println!("{}", "Ad Templates".bold());
            for template in AD_TEMPLATES.iter() {
                println!("  {}", template_line(template));
            }
            Ok(())
        }
        AdsCommands::List => {
            ctx.require_session().await?;
            if let Some(doc) = ctx.store.document().await {
                println!("{}", ad_summary(&doc.ads).bold());
                for line in ad_slot_lines(&doc.ads) {
                    println!("  {}", line);
                }
            }
            Ok(())
        }
        AdsCommands::EnableDemo => bulk(ctx, BulkAdTemplate::EnableAllDemo).await,
        AdsCommands::DisableAll => bulk(ctx, BulkAdTemplate::DisableAll).await,
        AdsCommands::ApplyTemplate { name } => {
            let template = AdTemplate::find(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown ad template: {}", name))?;
            ctx.require_session().await?;

            let result = ctx.session.apply_ad_template(template).await;
            match report_save(Section::Ads, result)? {
                Some(key) => println!("  {} placed in {}", template.name, key.to_string().cyan()),
                None => println!(
                    "{} All ad slots are enabled; disable one to apply a template",
                    "ℹ".cyan()
                ),
            }
            Ok(())
        }
    }
}

async fn bulk(ctx: &AppContext, template: BulkAdTemplate) -> anyhow::Result<()> {
    ctx.require_session().await?;
    report_save(
        Section::Ads,
        ctx.session.apply_bulk_ad_template(template).await,
    )?;
    println!("  {}", ad_summary(&template.placements()));
    Ok(())
}
