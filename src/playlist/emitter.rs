//! M3U playlist emission.
//!
//! Each catalog record becomes a fixed four-line block: an `#EXTINF` line
//! carrying the tvg attributes, two `#EXTVLCOPT` player options, and the CDN
//! stream URL templated from the channel number, followed by a blank
//! separator. Attribute values are written as-is; a title containing a double
//! quote produces malformed output, matching the observed behavior of the
//! upstream playlists.

use std::path::Path;
use tracing::info;

use crate::config;
use crate::errors::AppResult;
use crate::models::ChannelRecord;

const HTTP_REFERRER: &str = "https://cookiewebplay.xyz/";
const STREAM_URL_PREFIX: &str = "https://ddy6new.iosplayer.ru/ddy6/premium";
const STREAM_URL_SUFFIX: &str = "/mono.m3u8";

/// Render the playlist text for a list of records.
pub fn render_playlist(records: &[ChannelRecord]) -> String {
    let mut out = String::from("#EXTM3U\n");

    for record in records {
        out.push_str(&format!(
            "#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n",
            record.id, record.name, record.logo, record.category, record.name
        ));
        out.push_str(&format!(
            "#EXTVLCOPT:http-user-agent={}\n",
            config::USER_AGENT
        ));
        out.push_str(&format!("#EXTVLCOPT:http-referrer={HTTP_REFERRER}\n"));
        out.push_str(&format!(
            "{STREAM_URL_PREFIX}{}{STREAM_URL_SUFFIX}\n\n",
            record.number
        ));
    }

    out
}

/// Write the playlist for `records` to `path`.
pub fn write_playlist(records: &[ChannelRecord], path: &Path) -> AppResult<()> {
    std::fs::write(path, render_playlist(records))?;
    info!("Playlist created successfully: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(number: &str, name: &str) -> ChannelRecord {
        ChannelRecord {
            id: format!("ch{number}"),
            name: name.to_string(),
            logo: String::new(),
            category: "News".to_string(),
            number: number.to_string(),
            url: format!("https://example.com/stream/stream-{number}.php"),
        }
    }

    #[test]
    fn empty_catalog_renders_bare_header() {
        assert_eq!(render_playlist(&[]), "#EXTM3U\n");
    }

    #[test]
    fn line_counts_match_block_structure() {
        let records = vec![record("1", "One"), record("2", "Two"), record("3", "Three")];
        let text = render_playlist(&records);
        let lines: Vec<&str> = text.split('\n').collect();

        // Header + N * (4 content lines + 1 blank separator), plus the empty
        // fragment after the final newline.
        assert_eq!(lines.len(), 1 + records.len() * 5 + 1);

        let content: Vec<&str> = lines.iter().filter(|l| !l.is_empty()).copied().collect();
        assert_eq!(content.len(), 1 + records.len() * 4);
        assert_eq!(content[0], "#EXTM3U");
    }

    #[test]
    fn stream_url_embeds_the_channel_number() {
        let text = render_playlist(&[record("42", "Answer TV")]);
        assert!(text.contains("https://ddy6new.iosplayer.ru/ddy6/premium42/mono.m3u8"));
    }

    #[test]
    fn extinf_carries_all_tvg_attributes() {
        let mut rec = record("7", "Seven News");
        rec.logo = "https://example.com/logo.png".to_string();
        let text = render_playlist(&[rec]);
        let extinf = text.lines().nth(1).unwrap();

        assert!(extinf.starts_with("#EXTINF:-1 "));
        assert!(extinf.contains("tvg-id=\"ch7\""));
        assert!(extinf.contains("tvg-name=\"Seven News\""));
        assert!(extinf.contains("tvg-logo=\"https://example.com/logo.png\""));
        assert!(extinf.contains("group-title=\"News\""));
        assert!(extinf.ends_with(",Seven News"));
    }

    #[test]
    fn player_options_are_fixed_per_entry() {
        let text = render_playlist(&[record("1", "One")]);
        assert!(text.contains("#EXTVLCOPT:http-user-agent=Mozilla/5.0"));
        assert!(text.contains("#EXTVLCOPT:http-referrer=https://cookiewebplay.xyz/"));
    }
}
