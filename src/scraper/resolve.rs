//! Per-channel metadata resolution.
//!
//! Given a stream-page URL and its channel number, fetch the page and build a
//! [`ChannelRecord`]: title from the page heading (document title as a
//! fallback), category inferred from URL/title, and curated id/logo/category
//! applied on top for well-known brands.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use super::PageFetcher;
use crate::config::CATEGORIES;
use crate::models::{lookup_known_channel, ChannelRecord};

fn entry_title_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<h1[^>]*class="[^"]*entry-title[^"]*"[^>]*>(.*?)</h1>"#)
            .expect("invalid entry title regex")
    })
}

fn title_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<title[^>]*>(.*?)</title>").expect("invalid title regex"))
}

fn tag_strip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("invalid tag strip regex"))
}

fn watch_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Watch\s+").expect("invalid watch prefix regex"))
}

fn live_stream_suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+Live Stream.*").expect("invalid suffix regex"))
}

/// Raw title text: the primary heading if present, else the document title.
/// Inner tags are stripped. `None` when the page has neither element.
fn extract_title(html: &str) -> Option<String> {
    let raw = entry_title_regex()
        .captures(html)
        .or_else(|| title_tag_regex().captures(html))
        .map(|caps| caps[1].to_string())?;

    Some(tag_strip_regex().replace_all(&raw, "").trim().to_string())
}

/// Strip the "Watch " marker and the "Live Stream..." suffix the site pads
/// titles with.
fn clean_title(raw: &str) -> String {
    let title = watch_prefix_regex().replace_all(raw, "");
    let title = live_stream_suffix_regex().replace_all(&title, "");
    title.trim().to_string()
}

/// Case-insensitive first match of the category vocabulary against the page
/// URL or the title; "Uncategorized" when nothing matches.
fn infer_category(page_url: &str, title: &str) -> String {
    let url_lower = page_url.to_lowercase();
    let title_lower = title.to_lowercase();

    for cat in CATEGORIES {
        if url_lower.contains(cat) || (!title_lower.is_empty() && title_lower.contains(cat)) {
            return capitalize(cat);
        }
    }
    "Uncategorized".to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build a record from already-fetched page content. Split out from
/// [`resolve`] so the parsing rules are testable without a fetcher.
pub fn build_record(html: &str, page_url: &str, number: &str) -> ChannelRecord {
    let title = match extract_title(html) {
        Some(raw) => clean_title(&raw),
        None => format!("Channel {number}"),
    };

    let mut category = infer_category(page_url, &title);

    // Known-brand override takes precedence over the generic inference.
    let mut id = format!("ch{number}");
    let mut logo = String::new();
    if let Some(info) = lookup_known_channel(&title) {
        id = info.id.to_string();
        logo = info.logo.to_string();
        if let Some(cat) = info.category {
            category = cat.to_string();
        }
    }

    ChannelRecord {
        id,
        name: title,
        logo,
        category,
        number: number.to_string(),
        url: page_url.to_string(),
    }
}

/// Resolve a channel's metadata from its stream page. `None` when the page
/// cannot be fetched; every other gap (missing title, unknown brand) is
/// defaulted, never an error.
pub async fn resolve(
    fetcher: &dyn PageFetcher,
    page_url: &str,
    number: &str,
) -> Option<ChannelRecord> {
    let html = fetcher.fetch_page(page_url).await?;
    let record = build_record(&html, page_url, number);
    debug!("Resolved channel {}: {}", number, record.name);
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_preferred_over_document_title() {
        let html = r#"<html><head><title>Watch Something Live Stream</title></head>
            <body><h1 class="entry-title">Watch CNN Live Stream Online</h1></body></html>"#;
        let record = build_record(html, "https://example.com/stream/stream-5.php", "5");
        assert_eq!(record.name, "CNN");
    }

    #[test]
    fn document_title_is_the_fallback() {
        let html = "<html><head><title>Watch Sky News Live Stream</title></head><body></body></html>";
        let record = build_record(html, "https://example.com/stream/stream-9.php", "9");
        assert_eq!(record.name, "Sky News");
    }

    #[test]
    fn missing_title_elements_yield_synthetic_name() {
        let record = build_record("<html><body></body></html>", "https://x/stream-77.php", "77");
        assert_eq!(record.name, "Channel 77");
        assert_eq!(record.id, "ch77");
        assert_eq!(record.logo, "");
    }

    #[test]
    fn known_brand_overrides_id_logo_and_category() {
        let html = r#"<h1 class="entry-title">Watch ESPN USA Live Stream</h1>"#;
        let record = build_record(html, "https://example.com/usa/stream-3.php", "3");
        // Generic inference would say "Usa" (URL match), the table wins.
        assert_eq!(record.id, "espn");
        assert_eq!(record.logo, "https://i.imgur.com/GhhN7RZ.png");
        assert_eq!(record.category, "Sports");
    }

    #[test]
    fn brand_match_ignores_surrounding_text() {
        let html = r#"<h1 class="entry-title">The All-New HBO Comedy Block</h1>"#;
        let record = build_record(html, "https://x/stream-8.php", "8");
        assert_eq!(record.id, "hbo");
        assert_eq!(record.category, "Movies");
    }

    #[test]
    fn category_inferred_from_url_when_title_is_neutral() {
        let html = r#"<h1 class="entry-title">Generic Channel</h1>"#;
        let record = build_record(html, "https://example.com/sports/stream-2.php", "2");
        assert_eq!(record.category, "Sports");
    }

    #[test]
    fn category_defaults_to_uncategorized() {
        let html = r#"<h1 class="entry-title">Generic Channel</h1>"#;
        let record = build_record(html, "https://example.com/stream/stream-2.php", "2");
        assert_eq!(record.category, "Uncategorized");
    }

    #[test]
    fn tags_inside_heading_are_stripped() {
        let html = r#"<h1 class="entry-title">Watch <span>BBC One</span> Live Stream</h1>"#;
        let record = build_record(html, "https://x/stream-4.php", "4");
        assert_eq!(record.name, "BBC One");
        assert_eq!(record.id, "bbc");
    }
}
