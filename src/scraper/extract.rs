//! Channel-number extraction from raw HTML.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn stream_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"href="[^"]*stream-(\d+)\.php""#).expect("invalid stream link regex")
    })
}

/// Collect the distinct channel numbers linked from a page.
///
/// This is a plain regex over the raw text, not an HTML parse: the markup on
/// these pages shifts around but the link shape never changes, and a regex
/// tolerates broken markup that a strict parser would choke on.
pub fn extract_channel_numbers(html: &str) -> HashSet<String> {
    stream_link_regex()
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extract_channel_numbers("").is_empty());
    }

    #[test]
    fn html_without_stream_links_yields_empty_set() {
        let html = r#"<a href="/about.html">About</a> <a href="stream.php">x</a>"#;
        assert!(extract_channel_numbers(html).is_empty());
    }

    #[test]
    fn duplicate_links_are_deduplicated() {
        let html = r#"href="x/stream-42.php" href="x/stream-42.php" href="x/stream-7.php""#;
        let numbers = extract_channel_numbers(html);
        let expected: HashSet<String> = ["42", "7"].iter().map(|s| s.to_string()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn number_is_captured_from_arbitrary_paths() {
        let html = r#"<a href="https://example.com/stream/stream-123.php">Ch</a>"#;
        let numbers = extract_channel_numbers(html);
        assert!(numbers.contains("123"));
        assert_eq!(numbers.len(), 1);
    }
}
