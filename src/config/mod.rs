//! Fixed tunables for the scraper and playlist tools.
//!
//! There is no configuration file: every knob is a constant here, and
//! `ScanConfig::default()` is the canonical parameter set. The CLI only
//! overrides output paths and log verbosity.

use std::path::PathBuf;
use std::time::Duration;

/// Browser user agent sent with every request and embedded in emitted
/// playlists. The target site serves different markup to unknown agents,
/// so the exact string matters.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";

pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// Category labels, used both as seed-page paths under the base URL and as
/// the vocabulary for category inference.
pub const CATEGORIES: &[&str] = &[
    "sports",
    "entertainment",
    "news",
    "movies",
    "usa",
    "uk",
    "international",
];

/// Scan parameters. `Default` carries the canonical values; tests swap in
/// short delays and temp paths.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Site root; seed pages and stream-page URLs are joined onto this.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Total attempts per page, including the first.
    pub max_retries: u32,
    /// Fixed sleep between retry attempts. No growth, no jitter.
    pub retry_delay: Duration,
    /// Politeness sleep between candidate resolutions.
    pub resolve_delay: Duration,
    /// Checkpoint the catalog every this many loop iterations.
    pub checkpoint_interval: usize,
    /// Widen the observed [min, max] number window by this much on each side.
    pub range_margin: u32,
    /// Probe 1..this when the seed scan finds nothing at all.
    pub fallback_range_max: u32,
    /// Catalog JSON; if it exists at startup the scan is skipped entirely.
    pub catalog_path: PathBuf,
    /// Emitted playlist path.
    pub playlist_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_url: "https://daddylive.mp".to_string(),
            request_timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            resolve_delay: Duration::from_secs(1),
            checkpoint_interval: 10,
            range_margin: 50,
            fallback_range_max: 1000,
            catalog_path: PathBuf::from("daddylive_channels.json"),
            playlist_path: PathBuf::from("daddylive_all_channels.m3u"),
        }
    }
}
