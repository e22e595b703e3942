//! Image resolution against the external image-generation service.
//!
//! Resolution is decoupled from document assembly: [`resolve_images`] runs
//! as an async pre-pass that fills an [`ImageMap`] keyed by tag, and the
//! exporter then assembles synchronously from that map in document order.
//! Fetch failures are logged and skipped; they never fail an export.

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;

use crate::error::{Error, Result};
use crate::model::{ImageMap, Report, image_queries};

/// A collaborator that turns a free-text query into raw image bytes.
///
/// Object-safe so callers can inject mocks; see [`NoFetch`] for the
/// always-failing offline implementation.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<u8>>;
}

/// AI image generation via pollinations.ai.
///
/// Each request carries a random seed so repeated queries do not collide
/// in upstream caches.
pub struct PollinationsClient {
    http: reqwest::Client,
    width: u32,
    height: u32,
}

impl PollinationsClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            width: 600,
            height: 400,
        }
    }

    fn url(&self, query: &str) -> String {
        let seed: u32 = rand::rng().random_range(0..100_000);
        format!(
            "https://image.pollinations.ai/prompt/{}?width={}&height={}&nologo=true&seed={}",
            utf8_percent_encode(query, NON_ALPHANUMERIC),
            self.width,
            self.height,
            seed
        )
    }
}

impl Default for PollinationsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for PollinationsClient {
    async fn fetch(&self, query: &str) -> Result<Vec<u8>> {
        let response = self.http.get(self.url(query)).send().await?;
        if !response.status().is_success() {
            return Err(Error::ImageFetch(format!(
                "status {} for {query:?}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Fetcher that always fails; use for offline export or tests.
pub struct NoFetch;

#[async_trait]
impl ImageFetcher for NoFetch {
    async fn fetch(&self, _query: &str) -> Result<Vec<u8>> {
        Err(Error::ImageFetch("image fetching disabled".to_string()))
    }
}

/// Resolve every image tag in the report to bytes.
///
/// Pre-fetched entries in `report.images` are reused verbatim; the rest
/// are fetched sequentially in first-occurrence document order. A failed
/// fetch leaves its tag unresolved, which the exporter renders as an
/// omitted image.
pub async fn resolve_images(report: &Report, fetcher: &dyn ImageFetcher) -> ImageMap {
    let mut resolved = report.images.clone();

    for (tag, query) in image_queries(report) {
        if resolved.contains_key(&tag) {
            continue;
        }
        match fetcher.fetch(&query).await {
            Ok(bytes) => {
                log::debug!("fetched image for {query:?} ({} bytes)", bytes.len());
                resolved.insert(tag, bytes);
            }
            Err(e) => log::warn!("skipping image for {query:?}: {e}"),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Chapter;

    struct CannedFetcher;

    #[async_trait]
    impl ImageFetcher for CannedFetcher {
        async fn fetch(&self, query: &str) -> Result<Vec<u8>> {
            if query == "broken" {
                Err(Error::ImageFetch("canned failure".to_string()))
            } else {
                Ok(query.as_bytes().to_vec())
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_prefers_prefetched() {
        let mut report = Report::new("t")
            .with_chapter(Chapter::new(1, "c").with_content("[IMAGE:diagram]"));
        report
            .images
            .insert("[IMAGE:diagram]".to_string(), vec![1, 2, 3]);

        let resolved = resolve_images(&report, &CannedFetcher).await;
        assert_eq!(resolved["[IMAGE:diagram]"], vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_resolve_fetches_missing_and_skips_failures() {
        let report = Report::new("t")
            .with_chapter(Chapter::new(1, "c").with_content("[IMAGE:ok] and [IMAGE:broken]"));

        let resolved = resolve_images(&report, &CannedFetcher).await;
        assert_eq!(resolved["[IMAGE:ok]"], b"ok".to_vec());
        assert!(!resolved.contains_key("[IMAGE:broken]"));
    }

    #[tokio::test]
    async fn test_no_fetch_always_fails() {
        assert!(NoFetch.fetch("anything").await.is_err());
    }

    #[test]
    fn test_pollinations_url_encodes_query() {
        let client = PollinationsClient::new();
        let url = client.url("Battery Diagram");
        assert!(url.starts_with("https://image.pollinations.ai/prompt/Battery%20Diagram?"));
        assert!(url.contains("width=600"));
        assert!(url.contains("height=400"));
        assert!(url.contains("nologo=true"));
        assert!(url.contains("seed="));
    }
}
