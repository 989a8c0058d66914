//! Catalog building: seed scan, range expansion, and the resolve loop.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

use super::{extract::extract_channel_numbers, resolve, PageFetcher};
use crate::config::{ScanConfig, CATEGORIES};
use crate::errors::{AppError, AppResult};
use crate::models::ChannelRecord;

/// Drives discovery end to end: fetch seed pages, extract channel numbers,
/// widen the candidate window, then resolve every candidate sequentially with
/// a politeness sleep between requests and periodic catalog checkpoints.
///
/// Execution is strictly one request at a time. A failed candidate is simply
/// omitted from the catalog; the loop never aborts early.
pub struct CatalogBuilder<'a> {
    fetcher: &'a dyn PageFetcher,
    config: &'a ScanConfig,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, config: &'a ScanConfig) -> Self {
        Self { fetcher, config }
    }

    /// Run the full scan and return the accumulated catalog. The catalog file
    /// is checkpointed during the loop and rewritten once more at the end.
    pub async fn scan(&self) -> AppResult<Vec<ChannelRecord>> {
        let base = Url::parse(&self.config.base_url).map_err(|e| {
            AppError::source_error(format!("Invalid base URL {}: {e}", self.config.base_url))
        })?;

        let mut numbers = self.seed_scan(&base).await;
        self.expand_range(&mut numbers);

        // Ascending numeric order; non-numeric entries cannot occur since the
        // extractor only captures digits.
        let mut candidates: Vec<String> = numbers.into_iter().collect();
        candidates.sort_by_key(|n| n.parse::<u64>().unwrap_or(u64::MAX));

        let mut catalog = Vec::new();
        let total = candidates.len();

        for (idx, number) in candidates.iter().enumerate() {
            let page_url = self.stream_page_url(&base, number)?;
            info!("Processing {}/{}: channel {}", idx + 1, total, number);

            if let Some(record) = resolve::resolve(self.fetcher, &page_url, number).await {
                catalog.push(record);
                if idx % self.config.checkpoint_interval == 0 {
                    save_catalog(&catalog, &self.config.catalog_path)?;
                }
            }

            // Be nice to the server.
            tokio::time::sleep(self.config.resolve_delay).await;
        }

        save_catalog(&catalog, &self.config.catalog_path)?;
        Ok(catalog)
    }

    /// SEED_SCAN: union the channel numbers linked from the site root and
    /// each category page.
    async fn seed_scan(&self, base: &Url) -> HashSet<String> {
        let mut pages = vec![base.to_string()];
        for category in CATEGORIES {
            if let Ok(joined) = base.join(category) {
                pages.push(joined.to_string());
            }
        }

        info!("Scanning seed pages for channel links...");
        let mut numbers = HashSet::new();
        for page_url in &pages {
            if let Some(html) = self.fetcher.fetch_page(page_url).await {
                let found = extract_channel_numbers(&html);
                debug!("Found {} channel links on {}", found.len(), page_url);
                numbers.extend(found);
            }
        }
        numbers
    }

    /// RANGE_EXPAND: widen the observed [min, max] window by the configured
    /// margin on each side and add every integer in it — numbers never seen
    /// as links are probed speculatively. An empty seed scan falls back to a
    /// broad fixed range instead.
    fn expand_range(&self, numbers: &mut HashSet<String>) {
        let observed: Vec<u32> = numbers.iter().filter_map(|n| n.parse().ok()).collect();

        if let (Some(&min), Some(&max)) = (observed.iter().min(), observed.iter().max()) {
            let lo = min.saturating_sub(self.config.range_margin).max(1);
            let hi = max.saturating_add(self.config.range_margin);
            info!("Extending search to channel numbers {} to {}...", lo, hi);
            for n in lo..=hi {
                numbers.insert(n.to_string());
            }
        } else {
            info!(
                "No channels found in initial scan. Trying range 1 to {}...",
                self.config.fallback_range_max - 1
            );
            for n in 1..self.config.fallback_range_max {
                numbers.insert(n.to_string());
            }
        }
    }

    /// Canonical stream-page URL for a candidate number.
    fn stream_page_url(&self, base: &Url, number: &str) -> AppResult<String> {
        base.join(&format!("stream/stream-{number}.php"))
            .map(|u| u.to_string())
            .map_err(|e| AppError::source_error(format!("Bad stream page URL: {e}")))
    }
}

/// Load the catalog file when it exists, otherwise run a full scan. An
/// existing file short-circuits discovery entirely; there is no freshness
/// check and no merging with a partial run.
pub async fn load_or_scan(
    fetcher: &dyn PageFetcher,
    config: &ScanConfig,
) -> AppResult<Vec<ChannelRecord>> {
    if config.catalog_path.exists() {
        info!(
            "Found existing channel data, loading from {}",
            config.catalog_path.display()
        );
        return load_catalog(&config.catalog_path);
    }

    info!("Scanning for all available channels...");
    CatalogBuilder::new(fetcher, config).scan().await
}

/// Whole-file catalog rewrite, pretty-printed JSON. Not atomic: there is
/// exactly one writer, and the previous checkpoint is the recovery point if
/// a write is interrupted.
pub fn save_catalog(catalog: &[ChannelRecord], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    info!("Saved {} channels to {}", catalog.len(), path.display());
    Ok(())
}

/// Load a previously written catalog file.
pub fn load_catalog(path: &Path) -> AppResult<Vec<ChannelRecord>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
