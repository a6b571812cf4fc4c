use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::cache::ImageCache;
use crate::models::ImageCategory;
use crate::sources::ImageSource;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch image: {0}")]
    Network(#[from] reqwest::Error),
}

/// Fetches images from the configured source, serving recently fetched
/// bytes out of the injected cache.
pub struct ImageFetcher {
    source: Box<dyn ImageSource>,
    cache: Arc<ImageCache>,
    client: reqwest::Client,
}

impl ImageFetcher {
    pub fn new(source: Box<dyn ImageSource>, cache: Arc<ImageCache>, timeout: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            source,
            cache,
            client,
        }
    }

    /// Resolve the upstream URL for the request and return its bytes,
    /// from cache when possible. On a miss the full response body is read
    /// into memory and cached before returning; nothing is cached when the
    /// fetch fails.
    pub async fn fetch_image(
        &self,
        category: ImageCategory,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Result<Vec<u8>, FetchError> {
        let url = self.source.resolve(category, width, height);

        if let Some(data) = self.cache.get_image(&url) {
            debug!("Serving image from cache: {}", url);
            return Ok(data);
        }

        info!("Fetching image from upstream: {}", url);
        let data = self.fetch_from_upstream(&url).await?;

        self.cache.store_image(&url, data.clone());

        Ok(data)
    }

    async fn fetch_from_upstream(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
