//! Channel discovery: number extraction, metadata resolution, and the
//! catalog builder that drives them.

pub mod catalog;
pub mod extract;
pub mod resolve;

pub use catalog::CatalogBuilder;
pub use extract::extract_channel_numbers;

use async_trait::async_trait;

use crate::utils::PoliteHttpClient;

/// Seam between the discovery pipeline and the HTTP layer. Production code
/// uses [`PoliteHttpClient`]; tests substitute an in-memory fetcher.
///
/// The contract mirrors the retrying client: `None` means the page could not
/// be retrieved after the full attempt budget, and callers treat that as
/// "page unavailable" rather than an error.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Option<String>;
}

#[async_trait]
impl PageFetcher for PoliteHttpClient {
    async fn fetch_page(&self, url: &str) -> Option<String> {
        PoliteHttpClient::fetch_page(self, url).await
    }
}
