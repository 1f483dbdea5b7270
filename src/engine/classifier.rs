// src/engine/classifier.rs
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use url::Url;

use crate::engine::types::{ClassifiedResult, PageSignal, Platform};

/// Hostname pattern for one row of the platform table.
enum HostPattern {
    /// Matches when the hostname contains the fragment.
    Contains(&'static str),
    /// Matches the hostname exactly.
    Exact(&'static str),
}

/// Ordered host-to-platform table, evaluated top to bottom, first match wins.
/// Adding a platform is a table edit.
const PLATFORM_TABLE: &[(HostPattern, Platform)] = &[
    (HostPattern::Contains("instagram.com"), Platform::Instagram),
    (HostPattern::Contains("twitter.com"), Platform::Twitter),
    (HostPattern::Exact("x.com"), Platform::Twitter),
    (HostPattern::Contains("facebook.com"), Platform::Facebook),
    (HostPattern::Contains("tiktok.com"), Platform::Tiktok),
    (HostPattern::Contains("linkedin.com"), Platform::Linkedin),
    (HostPattern::Contains("patreon.com"), Platform::Patreon),
    (HostPattern::Contains("ko-fi.com"), Platform::Kofi),
    (HostPattern::Contains("buymeacoffee.com"), Platform::Buymeacoffee),
    (HostPattern::Contains("discord.gg"), Platform::Discord),
    (HostPattern::Contains("discord.com"), Platform::Discord),
    (HostPattern::Contains("twitch.tv"), Platform::Twitch),
    (HostPattern::Contains("reddit.com"), Platform::Reddit),
    (HostPattern::Contains("pinterest.com"), Platform::Pinterest),
    (HostPattern::Contains("snapchat.com"), Platform::Snapchat),
    (HostPattern::Contains("threads.net"), Platform::Threads),
    (HostPattern::Contains("onlyfans.com"), Platform::Onlyfans),
    (HostPattern::Contains("substack.com"), Platform::Substack),
    (HostPattern::Contains("medium.com"), Platform::Medium),
    (HostPattern::Contains("github.com"), Platform::Github),
    (HostPattern::Exact("t.me"), Platform::Telegram),
    (HostPattern::Contains("telegram.me"), Platform::Telegram),
];

/// Domains of the platform hosting the scanned page, plus its image/CDN
/// subdomain families. Links back into these are noise, not contact channels.
const HOST_SITE_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "ytimg.com",
    "ggpht.com",
    "googleusercontent.com",
];

const BUSINESS_PHRASES: &[&str] = &[
    "business inquiries",
    "business enquiries",
    "business inquiry",
    "for business",
    "business email",
    "collab",
    "sponsorship",
    "partnership",
    "brand deal",
    "work with me",
    "contact me",
    "contact us",
    "get in touch",
];

const BUSINESS_CAPTION_WORDS: &[&str] = &["business", "inquiry", "contact"];

enum LinkKind {
    Social(Platform),
    Website,
    HostSite,
    Unparseable,
}

pub struct SignalClassifier {
    email_regex: Regex,
}

impl SignalClassifier {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
                .unwrap(),
        }
    }

    /// Classifies the harvested candidate links plus the page text into the
    /// final result. Single pass over the links in harvested order; never
    /// fails, worst case is an all-empty result.
    pub fn classify(&self, page: &PageSignal, links: &[String]) -> ClassifiedResult {
        let emails = self.extract_emails(&page.text);

        let mut social = BTreeMap::new();
        let mut websites = Vec::new();
        let mut other_links = Vec::new();

        for link in links {
            match classify_link(link) {
                LinkKind::Social(platform) => {
                    // First URL per platform wins, later ones are dropped.
                    social.entry(platform).or_insert_with(|| link.clone());
                }
                LinkKind::Website => websites.push(link.clone()),
                LinkKind::Unparseable => other_links.push(link.clone()),
                LinkKind::HostSite => {}
            }
        }

        dedupe_in_order(&mut websites);
        dedupe_in_order(&mut other_links);

        let has_business_inquiry = self.detect_business_inquiry(page, links, &emails);

        debug!(
            "Classified {} links: {} social, {} websites, {} other",
            links.len(),
            social.len(),
            websites.len(),
            other_links.len()
        );

        ClassifiedResult {
            total_links_found: links.len(),
            social_links_found: social.len(),
            emails,
            social,
            websites,
            other_links,
            has_business_inquiry,
        }
    }

    fn extract_emails(&self, text: &str) -> Vec<String> {
        let mut emails = Vec::new();
        let mut seen = HashSet::new();

        for found in self.email_regex.find_iter(text) {
            let email = found.as_str().to_lowercase();
            if seen.insert(email.clone()) {
                emails.push(email);
            }
        }

        emails
    }

    /// Best-effort signal that the page offers a business contact path. Any
    /// one condition is enough; an extracted email alone sets the flag.
    fn detect_business_inquiry(
        &self,
        page: &PageSignal,
        links: &[String],
        emails: &[String],
    ) -> bool {
        if !emails.is_empty() {
            return true;
        }

        let text_lower = page.text.to_lowercase();
        if BUSINESS_PHRASES
            .iter()
            .any(|&phrase| text_lower.contains(phrase))
        {
            return true;
        }

        if links
            .iter()
            .any(|link| link.to_lowercase().starts_with("mailto:"))
        {
            return true;
        }

        page.captions.iter().any(|caption| {
            let caption_lower = caption.to_lowercase();
            BUSINESS_CAPTION_WORDS
                .iter()
                .any(|&word| caption_lower.contains(word))
        })
    }
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_link(link: &str) -> LinkKind {
    let parsed = match Url::parse(link) {
        Ok(parsed) => parsed,
        Err(_) => return LinkKind::Unparseable,
    };

    // Scheme-only URLs (mailto:, tel:) carry no hostname to classify.
    let host = match parsed.host_str() {
        Some(host) => host.to_lowercase(),
        None => return LinkKind::Unparseable,
    };
    let host = host.strip_prefix("www.").unwrap_or(&host);

    for (pattern, platform) in PLATFORM_TABLE {
        let matched = match pattern {
            HostPattern::Contains(fragment) => host.contains(fragment),
            HostPattern::Exact(exact) => host == *exact,
        };
        if matched {
            return LinkKind::Social(*platform);
        }
    }

    if HOST_SITE_DOMAINS
        .iter()
        .any(|&domain| host == domain || host.ends_with(&format!(".{}", domain)))
    {
        return LinkKind::HostSite;
    }

    LinkKind::Website
}

fn dedupe_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::extract_signals;

    fn page_with_anchors(text: &str, anchors: &[&str]) -> PageSignal {
        PageSignal {
            text: text.to_string(),
            anchor_links: anchors.iter().map(|s| s.to_string()).collect(),
            ..PageSignal::default()
        }
    }

    #[test]
    fn extracts_emails_lowercased_first_occurrence() {
        let page = page_with_anchors("contact: a@b.com, also A@B.COM", &[]);
        let result = extract_signals(&page);

        assert_eq!(result.emails, vec!["a@b.com"]);
        assert!(result.social.is_empty());
        assert!(result.has_business_inquiry);
    }

    #[test]
    fn extracts_emails_anywhere_in_text() {
        let page = page_with_anchors(
            "first@here.io starts the page, then (middle@there.dev), and ends with last@end.co",
            &[],
        );
        let result = extract_signals(&page);

        assert_eq!(
            result.emails,
            vec!["first@here.io", "middle@there.dev", "last@end.co"]
        );
    }

    #[test]
    fn first_platform_url_wins() {
        let page = page_with_anchors(
            "",
            &["https://www.instagram.com/x", "https://instagram.com/y"],
        );
        let result = extract_signals(&page);

        assert_eq!(
            result.social.get(&Platform::Instagram).map(String::as_str),
            Some("https://www.instagram.com/x")
        );
        assert_eq!(result.social_links_found, 1);
        assert!(result.websites.is_empty());
    }

    #[test]
    fn reordering_input_swaps_the_winner() {
        let page = page_with_anchors(
            "",
            &["https://instagram.com/y", "https://www.instagram.com/x"],
        );
        let result = extract_signals(&page);

        assert_eq!(
            result.social.get(&Platform::Instagram).map(String::as_str),
            Some("https://instagram.com/y")
        );
    }

    #[test]
    fn unparseable_link_routes_to_other_without_dropping_neighbors() {
        let page = page_with_anchors(
            "",
            &[
                "https://twitter.com/a",
                "not a url",
                "https://example.com",
            ],
        );
        let result = extract_signals(&page);

        assert_eq!(result.other_links, vec!["not a url"]);
        assert_eq!(result.websites, vec!["https://example.com"]);
        assert_eq!(
            result.social.get(&Platform::Twitter).map(String::as_str),
            Some("https://twitter.com/a")
        );
    }

    #[test]
    fn exact_x_com_maps_to_twitter() {
        let page = page_with_anchors("", &["https://x.com/handle"]);
        let result = extract_signals(&page);

        assert_eq!(
            result.social.get(&Platform::Twitter).map(String::as_str),
            Some("https://x.com/handle")
        );

        // "xx.com" must not ride the exact rule.
        let page = page_with_anchors("", &["https://xx.com/handle"]);
        let result = extract_signals(&page);
        assert_eq!(result.websites, vec!["https://xx.com/handle"]);
    }

    #[test]
    fn host_site_links_are_discarded_silently() {
        let page = page_with_anchors(
            "",
            &[
                "https://www.youtube.com/watch?v=abc",
                "https://i.ytimg.com/vi/abc/default.jpg",
                "https://yt3.ggpht.com/avatar",
                "https://example.org",
            ],
        );
        let result = extract_signals(&page);

        assert_eq!(result.websites, vec!["https://example.org"]);
        assert!(result.other_links.is_empty());
        assert!(result.social.is_empty());
        assert_eq!(result.total_links_found, 4);
    }

    #[test]
    fn classification_partition_is_complete() {
        let links = [
            "https://patreon.com/maker",
            "https://mystore.example",
            "totally broken",
            "https://youtube.com/@self",
        ];
        let page = page_with_anchors("", &links);
        let result = extract_signals(&page);

        let routed = result.social.len() + result.websites.len() + result.other_links.len();
        // One link discarded as host-site noise, the rest land in one bucket each.
        assert_eq!(routed, links.len() - 1);
    }

    #[test]
    fn websites_are_deduped_in_order() {
        let page = page_with_anchors(
            "",
            &[
                "https://b.example",
                "https://a.example",
                "https://b.example",
            ],
        );
        let result = extract_signals(&page);

        assert_eq!(result.websites, vec!["https://b.example", "https://a.example"]);
    }

    #[test]
    fn business_inquiry_fires_on_phrase() {
        let page = page_with_anchors("For business inquiries see my agent.", &[]);
        assert!(extract_signals(&page).has_business_inquiry);
    }

    #[test]
    fn business_inquiry_fires_on_mailto_link() {
        let page = page_with_anchors("", &["mailto:deals@creator.tv"]);
        let result = extract_signals(&page);

        assert!(result.has_business_inquiry);
        // mailto has no hostname, so it lands with the unclassifiable links.
        assert_eq!(result.other_links, vec!["mailto:deals@creator.tv"]);
    }

    #[test]
    fn business_inquiry_fires_on_caption() {
        let page = PageSignal {
            captions: vec!["View Business Email".to_string()],
            ..PageSignal::default()
        };
        assert!(extract_signals(&page).has_business_inquiry);
    }

    #[test]
    fn business_inquiry_false_without_any_signal() {
        let page = page_with_anchors("just videos here", &["https://shop.example"]);
        assert!(!extract_signals(&page).has_business_inquiry);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = extract_signals(&PageSignal::default());

        assert_eq!(result, ClassifiedResult::default());
        assert!(!result.has_business_inquiry);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let page = page_with_anchors(
            "reach me at who@where.com",
            &[
                "https://twitch.tv/streamer",
                "https://discord.gg/abc",
                "relative/path",
            ],
        );

        let first = serde_json::to_string(&extract_signals(&page)).unwrap();
        let second = serde_json::to_string(&extract_signals(&page)).unwrap();
        assert_eq!(first, second);
    }
}
