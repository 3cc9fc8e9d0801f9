//! Photo feed: one request to the rover photos API, with a fixed fallback batch.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::constants::{API_BASE, API_KEY, EARTH_DATE, MAX_BATCH_LEN, ROVER};
use crate::photo::{PhotoRecord, WirePhotos};

pub mod fallback;

mod transport;
pub use transport::{FeedResponse, FeedTransport, ReqwestTransport};

#[cfg(test)]
mod feed_tests;

/// Every way the live feed can be unavailable.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed photos payload: {0}")]
    Decode(String),
}

/// Where a batch came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeedSource {
    Live,
    Fallback,
}

/// Ordered photos held by the gallery after a fetch.
#[derive(Clone, Debug)]
pub struct FeedBatch {
    pub source: FeedSource,
    pub photos: Vec<Arc<PhotoRecord>>,
}

impl FeedBatch {
    pub fn new(source: FeedSource, photos: Vec<PhotoRecord>) -> Self {
        Self {
            source,
            photos: photos.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == FeedSource::Fallback
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Decode a photos response body, keeping at most [`MAX_BATCH_LEN`] entries in server order.
pub fn parse_batch(body: &[u8]) -> Result<Vec<PhotoRecord>, FeedError> {
    let wire: WirePhotos =
        serde_json::from_slice(body).map_err(|err| FeedError::Decode(err.to_string()))?;
    Ok(wire
        .photos
        .into_iter()
        .take(MAX_BATCH_LEN)
        .map(PhotoRecord::from)
        .collect())
}

pub fn request_url(base: &str, api_key: &str) -> String {
    format!("{base}/{ROVER}/photos?earth_date={EARTH_DATE}&api_key={api_key}")
}

pub struct PhotoFeedService<T = ReqwestTransport> {
    transport: T,
    base: String,
    api_key: String,
    fallback: Vec<PhotoRecord>,
}

impl PhotoFeedService<ReqwestTransport> {
    /// Live API through reqwest, with the built-in fallback batch.
    pub fn with_defaults() -> Self {
        Self::new(ReqwestTransport::new(), fallback::photos())
    }
}

impl<T: FeedTransport> PhotoFeedService<T> {
    pub fn new(transport: T, fallback: Vec<PhotoRecord>) -> Self {
        Self {
            transport,
            base: API_BASE.to_string(),
            api_key: API_KEY.to_string(),
            fallback,
        }
    }

    pub fn request_url(&self) -> String {
        request_url(&self.base, &self.api_key)
    }

    /// One request, no retries. Any failure is returned to the caller.
    pub async fn try_fetch(&self) -> Result<Vec<PhotoRecord>, FeedError> {
        let response = self.transport.get(&self.request_url()).await?;
        if !(200..300).contains(&response.status) {
            return Err(FeedError::Status(response.status));
        }
        parse_batch(&response.body)
    }

    /// Never fails: on any [`FeedError`] the fallback batch is returned instead.
    pub async fn fetch_batch(&self) -> FeedBatch {
        let start = Instant::now();
        match self.try_fetch().await {
            Ok(photos) => {
                log::info!(
                    "fetched {} photos from {} in {:?}",
                    photos.len(),
                    self.base,
                    start.elapsed()
                );
                FeedBatch::new(FeedSource::Live, photos)
            }
            Err(err) => {
                log::error!(
                    "failed to fetch photos, using {} fallback photos: {}",
                    self.fallback.len(),
                    err
                );
                FeedBatch::new(FeedSource::Fallback, self.fallback.clone())
            }
        }
    }
}
