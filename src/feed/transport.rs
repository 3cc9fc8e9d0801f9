use async_trait::async_trait;

use super::FeedError;

#[derive(Clone, Debug)]
pub struct FeedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The single network operation the feed needs.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<FeedResponse, FeedError>;
}

/// `url` up to its query string, which carries the API key.
fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<FeedResponse, FeedError> {
        log::info!("fetch photos from {}", without_query(url));
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        Ok(FeedResponse {
            status,
            body: body.to_vec(),
        })
    }
}
