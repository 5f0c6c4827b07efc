// ABOUTME: The five independently saved settings sections
// ABOUTME: Section identities, wire endpoints and full-section write payloads

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{AdPlacements, AnnouncementBar, Content, FloatingSocialButtons, SettingsDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Announcement,
    Social,
    Content,
    Ads,
    Css,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Announcement,
        Section::Social,
        Section::Content,
        Section::Ads,
        Section::Css,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Announcement => "announcement",
            Section::Social => "social",
            Section::Content => "content",
            Section::Ads => "ads",
            Section::Css => "css",
        }
    }

    /// Path segment under `/settings/` used by the write endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            Section::Announcement => "announcement",
            Section::Social => "social-buttons",
            Section::Content => "content",
            Section::Ads => "ads",
            Section::Css => "css",
        }
    }

    /// Location of the section inside the document's JSON tree
    pub fn root_path(&self) -> &'static [&'static str] {
        match self {
            Section::Announcement => &["appearance", "announcementBar"],
            Section::Social => &["appearance", "floatingSocialButtons"],
            Section::Content => &["content"],
            Section::Ads => &["ads"],
            Section::Css => &["appearance", "customCSS"],
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Section::Announcement => "Announcement settings saved successfully!",
            Section::Social => "Social buttons settings saved successfully!",
            Section::Content => "Content settings saved successfully!",
            Section::Ads => "Ads settings saved successfully!",
            Section::Css => "Custom CSS saved successfully!",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Section::Announcement => "Failed to save announcement settings. Please try again.",
            Section::Social => "Failed to save social buttons settings. Please try again.",
            Section::Content => "Failed to save content settings. Please try again.",
            Section::Ads => "Failed to save ads settings. Please try again.",
            Section::Css => "Failed to save custom CSS. Please try again.",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == lowered || section.endpoint() == lowered)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// Body of `PUT /settings/css`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssPayload {
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

/// Full snapshot of one section, sent as-is by a section write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionPayload {
    Announcement(AnnouncementBar),
    Social(FloatingSocialButtons),
    Content(Content),
    Ads(AdPlacements),
    Css(CssPayload),
}

impl SectionPayload {
    pub fn section(&self) -> Section {
        match self {
            SectionPayload::Announcement(_) => Section::Announcement,
            SectionPayload::Social(_) => Section::Social,
            SectionPayload::Content(_) => Section::Content,
            SectionPayload::Ads(_) => Section::Ads,
            SectionPayload::Css(_) => Section::Css,
        }
    }
}

impl SettingsDocument {
    pub fn section_payload(&self, section: Section) -> SectionPayload {
        match section {
            Section::Announcement => {
                SectionPayload::Announcement(self.appearance.announcement_bar.clone())
            }
            Section::Social => {
                SectionPayload::Social(self.appearance.floating_social_buttons.clone())
            }
            Section::Content => SectionPayload::Content(self.content.clone()),
            Section::Ads => SectionPayload::Ads(self.ads.clone()),
            Section::Css => SectionPayload::Css(CssPayload {
                custom_css: self.appearance.custom_css.clone(),
            }),
        }
    }
}
