// ABOUTME: Core types and utilities for Sitepanel
// ABOUTME: Settings document model, sections, field-path updates and ad templates

pub mod constants;
pub mod path;
pub mod section;
pub mod templates;
pub mod token;
pub mod types;

// Re-export main types
pub use types::{
    AdPlacements, AdSlot, AdSlotKey, AnnouncementBar, Appearance, Content, FloatingSocialButtons,
    SettingsDocument, SocialLinks,
};

pub use path::{update_field, PathError};
pub use section::{CssPayload, Section, SectionPayload};
pub use templates::{demo_ad_placements, AdTemplate, BulkAdTemplate, AD_TEMPLATES};
pub use token::AuthToken;

// Re-export constants
pub use constants::{
    sitepanel_dir, CUSTOM_CSS_BLOCK_ID, SETTINGS_STORAGE_KEY, TOKEN_STORAGE_KEY,
};
