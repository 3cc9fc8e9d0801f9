use super::*;
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Ok(u16, String),
    Fail(&'static str),
}

struct StubTransport {
    reply: Reply,
    urls: Mutex<Vec<String>>,
}

impl StubTransport {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            urls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FeedTransport for StubTransport {
    async fn get(&self, url: &str) -> Result<FeedResponse, FeedError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Ok(status, body) => Ok(FeedResponse {
                status: *status,
                body: body.as_bytes().to_vec(),
            }),
            Reply::Fail(message) => Err(FeedError::Transport(message.to_string())),
        }
    }
}

fn photos_json(count: u64) -> String {
    let photos: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": 1000 + i,
                "sol": 1004,
                "img_src": format!("http://example.com/{i}.jpg"),
                "earth_date": "2015-06-03",
                "camera": { "name": "NAVCAM", "full_name": "Navigation Camera" },
                "rover": { "name": "Curiosity", "status": "active" }
            })
        })
        .collect();
    serde_json::json!({ "photos": photos }).to_string()
}

fn service(reply: Reply) -> PhotoFeedService<StubTransport> {
    PhotoFeedService::new(StubTransport::new(reply), fallback::photos())
}

fn ids(batch: &FeedBatch) -> Vec<u64> {
    batch.photos.iter().map(|photo| photo.id).collect()
}

#[test]
fn request_url_targets_curiosity_on_fixed_date() {
    assert_eq!(
        request_url("https://api.example.com/rovers", "KEY"),
        "https://api.example.com/rovers/curiosity/photos?earth_date=2015-6-3&api_key=KEY"
    );
}

#[tokio::test]
async fn sends_one_request_to_the_rover_endpoint() {
    let service = service(Reply::Ok(200, photos_json(2)));
    service.fetch_batch().await;

    let urls = service.transport.urls.lock().unwrap().clone();
    assert_eq!(
        urls,
        ["https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity/photos?earth_date=2015-6-3&api_key=DEMO_KEY"]
    );
}

#[tokio::test]
async fn large_response_is_truncated_to_fifteen_in_server_order() {
    let batch = service(Reply::Ok(200, photos_json(40))).fetch_batch().await;

    assert_eq!(batch.source, FeedSource::Live);
    assert_eq!(ids(&batch), (1000..1015).collect::<Vec<u64>>());
}

#[tokio::test]
async fn exactly_fifteen_are_kept() {
    let batch = service(Reply::Ok(200, photos_json(15))).fetch_batch().await;
    assert_eq!(batch.len(), 15);
}

#[tokio::test]
async fn small_response_is_kept_whole() {
    let batch = service(Reply::Ok(200, photos_json(4))).fetch_batch().await;

    assert_eq!(batch.source, FeedSource::Live);
    assert_eq!(ids(&batch), [1000, 1001, 1002, 1003]);
}

#[tokio::test]
async fn empty_photos_is_live_and_empty() {
    let batch = service(Reply::Ok(200, photos_json(0))).fetch_batch().await;

    assert_eq!(batch.source, FeedSource::Live);
    assert!(batch.is_empty());
}

#[tokio::test]
async fn every_failure_yields_the_fallback_batch() {
    let replies = [
        Reply::Fail("connection refused"),
        Reply::Ok(500, photos_json(3)),
        Reply::Ok(404, String::new()),
        Reply::Ok(429, "rate limited".to_string()),
        Reply::Ok(200, "not json".to_string()),
        Reply::Ok(200, r#"{"errors":"No Photos Found"}"#.to_string()),
    ];

    for reply in replies {
        let batch = service(reply).fetch_batch().await;
        assert!(batch.is_fallback());
        assert_eq!(ids(&batch), [102693, 102694, 102695]);
    }
}

#[tokio::test]
async fn try_fetch_reports_the_cause() {
    let err = service(Reply::Ok(503, String::new())).try_fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Status(503)));

    let err = service(Reply::Ok(200, "{".to_string())).try_fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));

    let err = service(Reply::Fail("dns")).try_fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Transport(_)));
}

#[tokio::test]
async fn injected_fixture_replaces_builtin_fallback() {
    let mut fixture = fallback::photos();
    fixture.truncate(1);
    fixture[0].id = 7;

    let service = PhotoFeedService::new(StubTransport::new(Reply::Fail("offline")), fixture);
    let batch = service.fetch_batch().await;

    assert!(batch.is_fallback());
    assert_eq!(ids(&batch), [7]);
}
