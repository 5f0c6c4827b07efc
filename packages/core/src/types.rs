// ABOUTME: Settings document type definitions
// ABOUTME: Appearance, content and the fixed set of eleven ad placements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single source of truth rendered by the live site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    pub appearance: Appearance,
    pub content: Content,
    pub ads: AdPlacements,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Appearance {
    pub announcement_bar: AnnouncementBar,
    pub floating_social_buttons: FloatingSocialButtons,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnouncementBar {
    pub enabled: bool,
    pub text: String,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloatingSocialButtons {
    pub enabled: bool,
    pub discord_url: String,
    pub telegram_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Content {
    pub disclaimer: String,
    pub about_us: String,
    pub contact_email: String,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub discord: String,
    pub telegram: String,
}

/// One placement's enabled flag, image URL and click-through URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdSlot {
    pub enabled: bool,
    pub image_url: String,
    pub click_url: String,
}

impl AdSlot {
    pub fn enabled(image_url: impl Into<String>, click_url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            image_url: image_url.into(),
            click_url: click_url.into(),
        }
    }

    /// Disabled slot with its content cleared
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Placement keys, declared in the fixed scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdSlotKey {
    MainPageAd1,
    MainPageAd2,
    MainPageAd3,
    MainPageAd4,
    SearchTopAd,
    SearchBottomAd,
    MoviesPageAd,
    MoviesPageBottomAd,
    ShowsPageAd,
    ShowsPageBottomAd,
    PlayerPageAd,
}

impl AdSlotKey {
    pub const ALL: [AdSlotKey; 11] = [
        AdSlotKey::MainPageAd1,
        AdSlotKey::MainPageAd2,
        AdSlotKey::MainPageAd3,
        AdSlotKey::MainPageAd4,
        AdSlotKey::SearchTopAd,
        AdSlotKey::SearchBottomAd,
        AdSlotKey::MoviesPageAd,
        AdSlotKey::MoviesPageBottomAd,
        AdSlotKey::ShowsPageAd,
        AdSlotKey::ShowsPageBottomAd,
        AdSlotKey::PlayerPageAd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdSlotKey::MainPageAd1 => "mainPageAd1",
            AdSlotKey::MainPageAd2 => "mainPageAd2",
            AdSlotKey::MainPageAd3 => "mainPageAd3",
            AdSlotKey::MainPageAd4 => "mainPageAd4",
            AdSlotKey::SearchTopAd => "searchTopAd",
            AdSlotKey::SearchBottomAd => "searchBottomAd",
            AdSlotKey::MoviesPageAd => "moviesPageAd",
            AdSlotKey::MoviesPageBottomAd => "moviesPageBottomAd",
            AdSlotKey::ShowsPageAd => "showsPageAd",
            AdSlotKey::ShowsPageBottomAd => "showsPageBottomAd",
            AdSlotKey::PlayerPageAd => "playerPageAd",
        }
    }
}

impl fmt::Display for AdSlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdSlotKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdSlotKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown ad slot: {}", s))
    }
}

/// The `ads` section. One field per placement so no slot can be added or
/// removed at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdPlacements {
    pub main_page_ad1: AdSlot,
    pub main_page_ad2: AdSlot,
    pub main_page_ad3: AdSlot,
    pub main_page_ad4: AdSlot,
    pub search_top_ad: AdSlot,
    pub search_bottom_ad: AdSlot,
    pub movies_page_ad: AdSlot,
    pub movies_page_bottom_ad: AdSlot,
    pub shows_page_ad: AdSlot,
    pub shows_page_bottom_ad: AdSlot,
    pub player_page_ad: AdSlot,
}

impl AdPlacements {
    /// Build a mapping by computing every slot from its key
    pub fn from_fn(mut f: impl FnMut(AdSlotKey) -> AdSlot) -> Self {
        let mut placements = Self::default();
        for key in AdSlotKey::ALL {
            *placements.get_mut(key) = f(key);
        }
        placements
    }

    pub fn get(&self, key: AdSlotKey) -> &AdSlot {
        match key {
            AdSlotKey::MainPageAd1 => &self.main_page_ad1,
            AdSlotKey::MainPageAd2 => &self.main_page_ad2,
            AdSlotKey::MainPageAd3 => &self.main_page_ad3,
            AdSlotKey::MainPageAd4 => &self.main_page_ad4,
            AdSlotKey::SearchTopAd => &self.search_top_ad,
            AdSlotKey::SearchBottomAd => &self.search_bottom_ad,
            AdSlotKey::MoviesPageAd => &self.movies_page_ad,
            AdSlotKey::MoviesPageBottomAd => &self.movies_page_bottom_ad,
            AdSlotKey::ShowsPageAd => &self.shows_page_ad,
            AdSlotKey::ShowsPageBottomAd => &self.shows_page_bottom_ad,
            AdSlotKey::PlayerPageAd => &self.player_page_ad,
        }
    }

    pub fn get_mut(&mut self, key: AdSlotKey) -> &mut AdSlot {
        match key {
            AdSlotKey::MainPageAd1 => &mut self.main_page_ad1,
            AdSlotKey::MainPageAd2 => &mut self.main_page_ad2,
            AdSlotKey::MainPageAd3 => &mut self.main_page_ad3,
            AdSlotKey::MainPageAd4 => &mut self.main_page_ad4,
            AdSlotKey::SearchTopAd => &mut self.search_top_ad,
            AdSlotKey::SearchBottomAd => &mut self.search_bottom_ad,
            AdSlotKey::MoviesPageAd => &mut self.movies_page_ad,
            AdSlotKey::MoviesPageBottomAd => &mut self.movies_page_bottom_ad,
            AdSlotKey::ShowsPageAd => &mut self.shows_page_ad,
            AdSlotKey::ShowsPageBottomAd => &mut self.shows_page_bottom_ad,
            AdSlotKey::PlayerPageAd => &mut self.player_page_ad,
        }
    }

    /// Slots in the fixed key order
    pub fn iter(&self) -> impl Iterator<Item = (AdSlotKey, &AdSlot)> + '_ {
        AdSlotKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn first_disabled(&self) -> Option<AdSlotKey> {
        self.iter()
            .find(|(_, slot)| !slot.enabled)
            .map(|(key, _)| key)
    }

    pub fn enabled_count(&self) -> usize {
        self.iter().filter(|(_, slot)| slot.enabled).count()
    }
}
