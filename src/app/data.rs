use crate::feed::PhotoFeedService;
use crate::message::Message;
use cosmic::action;
use cosmic::app::Task;
use std::sync::Arc;
use std::time::Instant;

/// Run the feed once for the gallery mounted as `generation`.
pub fn fetch_batch_task(feed: Arc<PhotoFeedService>, generation: u64) -> Task<Message> {
    Task::perform(
        async move {
            log::info!("start photo fetch for gallery {}", generation);
            let start = Instant::now();
            let batch = feed.fetch_batch().await;
            log::info!(
                "gallery {} received {} photos from {:?} feed in {:?}",
                generation,
                batch.len(),
                batch.source,
                start.elapsed()
            );
            action::app(Message::FeedLoaded(generation, batch))
        },
        |x| x,
    )
}
