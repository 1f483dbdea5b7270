// src/engine/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of a rendered profile page, as handed over by the page-source
/// layer. All fields may legitimately be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSignal {
    /// Visible text content of the page.
    pub text: String,
    /// Absolute URLs from generic hyperlink elements, in document order.
    pub anchor_links: Vec<String>,
    /// Absolute URLs lifted from profile-specific UI containers.
    pub platform_links: Vec<String>,
    /// Raw JSON text of each embedded structured-data annotation block.
    pub structured_blocks: Vec<String>,
    /// Visible captions of buttons and interactive anchors.
    pub captions: Vec<String>,
}

#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    Tiktok,
    Linkedin,
    Patreon,
    Kofi,
    Buymeacoffee,
    Discord,
    Twitch,
    Reddit,
    Pinterest,
    Snapchat,
    Threads,
    Onlyfans,
    Substack,
    Medium,
    Github,
    Telegram,
}

/// Classified contact and social-presence signals for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    /// Lower-cased email addresses, first occurrence kept.
    pub emails: Vec<String>,
    /// One URL per recognized platform, first qualifying URL wins.
    pub social: BTreeMap<Platform, String>,
    /// External sites that are not a recognized platform.
    pub websites: Vec<String>,
    /// Harvested strings that failed URL parsing.
    pub other_links: Vec<String>,
    pub has_business_inquiry: bool,
    pub total_links_found: usize,
    pub social_links_found: usize,
}
