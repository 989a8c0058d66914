//! Group-title re-tagging for existing M3U playlists.
//!
//! Walks EXTINF/URL line pairs and rewrites each entry with a `group-title`
//! attribute derived from the channel name's prefix. Everything else —
//! comments, EXTINF lines that already carry attributes, EXTINF lines with no
//! following URL — passes through verbatim, which also makes the transform
//! idempotent on its own output.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

use crate::errors::{AppError, AppResult};

/// Group names longer than this are considered noise, not a prefix.
const MAX_GROUP_LEN: usize = 20;

fn extinf_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#EXTINF:-1,(.*)").expect("invalid EXTINF regex"))
}

/// Decide the group label for a channel display name. Ordered rules:
/// explicit prefixes first, then the text before a colon as a generic
/// fallback, then "Uncategorized".
pub fn group_for_name(name: &str) -> String {
    if name.starts_with("MM:") {
        return "Main Media".to_string();
    }
    if name.starts_with("WMM:") {
        return "World Main Media".to_string();
    }
    if name.starts_with("EVENTS") {
        return "Live Events".to_string();
    }
    if let Some((prefix, _)) = name.split_once(':') {
        let prefix = prefix.trim();
        if !prefix.is_empty() && prefix.chars().count() < MAX_GROUP_LEN {
            return prefix.to_string();
        }
    }
    "Uncategorized".to_string()
}

/// Rewrite the body of a playlist (everything after the `#EXTM3U` header,
/// which is re-emitted as the first output line).
fn retag_lines(lines: &[&str]) -> Vec<String> {
    let mut output = vec!["#EXTM3U".to_string()];

    let mut i = 1;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.starts_with("#EXTINF:") && i + 1 < lines.len() {
            if let Some(caps) = extinf_name_regex().captures(line) {
                let name = caps[1].trim();
                let url = lines[i + 1].trim();
                let group = group_for_name(name);
                output.push(format!("#EXTINF:-1 group-title=\"{group}\",{name}"));
                output.push(url.to_string());
                i += 2;
                continue;
            }
        }

        output.push(line.to_string());
        i += 1;
    }

    output
}

/// Re-tag `input` into `output`. Fails fast, with no output written, when the
/// input file is missing or does not start with the `#EXTM3U` header. The
/// whole input is processed before anything is written.
pub fn retag_playlist(input: &Path, output: &Path) -> AppResult<()> {
    if !input.exists() {
        return Err(AppError::playlist(format!(
            "input file '{}' not found",
            input.display()
        )));
    }

    let contents = std::fs::read_to_string(input)?;
    let lines: Vec<&str> = contents.lines().collect();

    match lines.first() {
        Some(first) if first.trim() == "#EXTM3U" => {}
        _ => {
            return Err(AppError::playlist(
                "input does not appear to be a valid M3U file",
            ));
        }
    }

    let rewritten = retag_lines(&lines);
    let mut text = rewritten.join("\n");
    text.push('\n');
    std::fs::write(output, text)?;

    info!("Organized playlist saved to '{}'", output.display());
    Ok(())
}
