// ABOUTME: Ad template catalog and bulk rewrites of the ads mapping
// ABOUTME: Demo placeholders, disable-all and named single-slot templates

use crate::types::{AdPlacements, AdSlot, AdSlotKey};

/// Named ad content that can be dropped into the first free slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdTemplate {
    pub name: &'static str,
    pub image_url: &'static str,
    pub click_url: &'static str,
    pub category: &'static str,
}

impl AdTemplate {
    pub fn to_slot(&self) -> AdSlot {
        AdSlot::enabled(self.image_url, self.click_url)
    }

    /// Look a template up by name, ignoring case and a trailing " Ad"
    pub fn find(name: &str) -> Option<&'static AdTemplate> {
        let wanted = name.trim().to_lowercase();
        AD_TEMPLATES.iter().find(|template| {
            let full = template.name.to_lowercase();
            full == wanted || full.trim_end_matches(" ad") == wanted
        })
    }
}

pub const AD_TEMPLATES: [AdTemplate; 6] = [
    AdTemplate {
        name: "Gaming Ad",
        image_url: "https://picsum.photos/400/200?random=gaming",
        click_url: "https://gaming-site.com",
        category: "Entertainment",
    },
    AdTemplate {
        name: "Tech Ad",
        image_url: "https://picsum.photos/400/200?random=tech",
        click_url: "https://tech-site.com",
        category: "Technology",
    },
    AdTemplate {
        name: "Fashion Ad",
        image_url: "https://picsum.photos/400/200?random=fashion",
        click_url: "https://fashion-site.com",
        category: "Lifestyle",
    },
    AdTemplate {
        name: "Food Ad",
        image_url: "https://picsum.photos/400/200?random=food",
        click_url: "https://food-site.com",
        category: "Food & Drink",
    },
    AdTemplate {
        name: "Travel Ad",
        image_url: "https://picsum.photos/400/200?random=travel",
        click_url: "https://travel-site.com",
        category: "Travel",
    },
    AdTemplate {
        name: "Education Ad",
        image_url: "https://picsum.photos/400/200?random=education",
        click_url: "https://edu-site.com",
        category: "Education",
    },
];

const DEMO_CLICK_URL: &str = "https://example.com";

fn demo_image_seed(key: AdSlotKey) -> u8 {
    match key {
        AdSlotKey::MainPageAd1 => 1,
        AdSlotKey::MainPageAd2 => 2,
        AdSlotKey::MainPageAd3 => 3,
        AdSlotKey::MainPageAd4 => 4,
        AdSlotKey::SearchTopAd => 5,
        AdSlotKey::SearchBottomAd => 6,
        AdSlotKey::MoviesPageAd => 7,
        AdSlotKey::MoviesPageBottomAd => 11,
        AdSlotKey::ShowsPageAd => 8,
        AdSlotKey::ShowsPageBottomAd => 12,
        AdSlotKey::PlayerPageAd => 10,
    }
}

/// Every slot enabled with placeholder content
pub fn demo_ad_placements() -> AdPlacements {
    AdPlacements::from_fn(|key| {
        AdSlot::enabled(
            format!("https://picsum.photos/800/200?random={}", demo_image_seed(key)),
            DEMO_CLICK_URL,
        )
    })
}

/// Whole-mapping rewrites of the `ads` section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAdTemplate {
    EnableAllDemo,
    DisableAll,
}

impl BulkAdTemplate {
    pub fn placements(&self) -> AdPlacements {
        match self {
            BulkAdTemplate::EnableAllDemo => demo_ad_placements(),
            BulkAdTemplate::DisableAll => AdPlacements::from_fn(|_| AdSlot::cleared()),
        }
    }
}
