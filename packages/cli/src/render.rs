// ABOUTME: Argument parsing and plain-text formatting helpers for CLI output
// ABOUTME: Kept free of terminal colors so they can be asserted in tests

use anyhow::bail;
use serde_json::Value;

use sitepanel_core::{AdPlacements, AdTemplate, Section};
use sitepanel_settings::{LoadOutcome, SectionSaveState};

/// Parse an on/off style switch argument
pub fn parse_switch(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "enable" | "enabled" | "1" => Ok(true),
        "off" | "false" | "no" | "disable" | "disabled" | "0" => Ok(false),
        other => bail!("Expected on or off, got '{}'", other),
    }
}

/// JSON literal when it parses, plain string otherwise
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn describe_outcome(outcome: LoadOutcome) -> &'static str {
    match outcome {
        LoadOutcome::Fresh => "loaded from API",
        LoadOutcome::FromCache => "loaded from local cache (API unreachable)",
        LoadOutcome::Stale => "showing previously loaded settings",
        LoadOutcome::Unavailable => "settings unavailable",
    }
}

pub fn section_line(section: Section, state: &SectionSaveState) -> String {
    format!("{:<13} {}", section.as_str(), state)
}

pub fn ad_summary(ads: &AdPlacements) -> String {
    format!("{}/{} ad slots enabled", ads.enabled_count(), ads.iter().count())
}

pub fn ad_slot_lines(ads: &AdPlacements) -> Vec<String> {
    ads.iter()
        .map(|(key, slot)| {
            let marker = if slot.enabled { "on " } else { "off" };
            if slot.image_url.is_empty() {
                format!("[{}] {}", marker, key)
            } else {
                format!("[{}] {} -> {}", marker, key, slot.image_url)
            }
        })
        .collect()
}

pub fn template_line(template: &AdTemplate) -> String {
    format!(
        "{:<14} {:<14} {}",
        template.name, template.category, template.click_url
    )
}
