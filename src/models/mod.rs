//! Data model: channel records and the curated known-channel table.

use serde::{Deserialize, Serialize};

/// A discovered channel. Immutable once appended to the catalog; uniqueness
/// is by `number` and only as strong as set-based discovery makes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    /// Logo URL, empty when unknown.
    pub logo: String,
    pub category: String,
    /// Numeric channel identifier, kept as a string for catalog stability.
    pub number: String,
    /// Stream-page URL the record was resolved from.
    pub url: String,
}

/// Curated metadata for a well-known brand.
#[derive(Debug, Clone, Copy)]
pub struct KnownChannel {
    pub id: &'static str,
    pub logo: &'static str,
    pub category: Option<&'static str>,
}

/// Static brand table, matched case-insensitively as a substring of the page
/// title. Ordered: the first matching entry wins.
pub const KNOWN_CHANNELS: &[(&str, KnownChannel)] = &[
    (
        "espn",
        KnownChannel {
            id: "espn",
            logo: "https://i.imgur.com/GhhN7RZ.png",
            category: Some("Sports"),
        },
    ),
    (
        "espn2",
        KnownChannel {
            id: "espn2",
            logo: "https://i.imgur.com/R7UtvMv.png",
            category: Some("Sports"),
        },
    ),
    (
        "fox",
        KnownChannel {
            id: "fox",
            logo: "https://i.imgur.com/5XuxwU2.png",
            category: Some("Entertainment"),
        },
    ),
    (
        "cnn",
        KnownChannel {
            id: "cnn",
            logo: "https://i.imgur.com/1JnyzHv.png",
            category: Some("News"),
        },
    ),
    (
        "bbc",
        KnownChannel {
            id: "bbc",
            logo: "https://i.imgur.com/UF9IfLw.png",
            category: Some("News"),
        },
    ),
    (
        "nbc",
        KnownChannel {
            id: "nbc",
            logo: "https://i.imgur.com/yPVJbpC.png",
            category: Some("Entertainment"),
        },
    ),
    (
        "abc",
        KnownChannel {
            id: "abc",
            logo: "https://i.imgur.com/UtqRX7U.png",
            category: Some("Entertainment"),
        },
    ),
    (
        "hbo",
        KnownChannel {
            id: "hbo",
            logo: "https://i.imgur.com/RQwVnBf.png",
            category: Some("Movies"),
        },
    ),
];

/// Find curated metadata for a title, case-insensitively. First match wins.
pub fn lookup_known_channel(title: &str) -> Option<&'static KnownChannel> {
    let lower = title.to_lowercase();
    KNOWN_CHANNELS
        .iter()
        .find(|(brand, _)| lower.contains(brand))
        .map(|(_, info)| info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let info = lookup_known_channel("Watch CNN International").unwrap();
        assert_eq!(info.id, "cnn");
        assert_eq!(info.category, Some("News"));
    }

    #[test]
    fn first_match_wins() {
        // "espn" precedes "espn2" in the table, so an ESPN2 title still
        // resolves to the espn entry.
        let info = lookup_known_channel("ESPN2 Live").unwrap();
        assert_eq!(info.id, "espn");
    }

    #[test]
    fn unknown_title_has_no_entry() {
        assert!(lookup_known_channel("Totally Obscure TV").is_none());
    }
}
