use super::*;
use crate::feed::{FeedBatch, FeedSource, fallback};
use crate::photo::PhotoRecord;

fn app() -> App {
    let config = Config::default();
    let mut app = App {
        core: Core::default(),
        config_handler: None,
        screen: ScreenConfig::new(&config, None, "en".to_string()),
        config,
        locale_override: None,
        app_themes: Vec::new(),
        context_page: ContextPage::Settings,
        feed: Arc::new(PhotoFeedService::with_defaults()),
        gallery: GalleryPage::mount(0),
        next_generation: 0,
        navigator: Navigator::new(),
        details_page_opt: None,
        scrollable_id: widget::Id::unique(),
        scroll_views: HashMap::new(),
    };
    let _ = app.mount_gallery();
    app
}

fn loaded() -> App {
    let mut app = app();
    let batch = FeedBatch::new(FeedSource::Fallback, fallback::photos());
    let _ = handlers::update(&mut app, Message::FeedLoaded(0, batch));
    app
}

#[test]
fn mount_starts_loading_with_one_generation() {
    let app = app();
    assert!(app.gallery.is_loading());
    assert_eq!(app.gallery.generation(), 0);
    assert_eq!(app.next_generation, 1);
    assert!(app.details_page_opt.is_none());
}

#[test]
fn feed_result_makes_the_gallery_ready() {
    let app = loaded();
    assert!(!app.gallery.is_loading());
    let ids: Vec<u64> = app.gallery.photos().iter().map(|photo| photo.id).collect();
    assert_eq!(ids, [102693, 102694, 102695]);
}

#[test]
fn stale_feed_result_is_dropped() {
    let mut app = app();
    let batch = FeedBatch::new(FeedSource::Live, fallback::photos());
    let _ = handlers::update(&mut app, Message::FeedLoaded(7, batch));
    assert!(app.gallery.is_loading());
}

#[test]
fn select_opens_details_with_the_shown_record() {
    let mut app = loaded();
    let _ = handlers::update(&mut app, Message::SelectPhoto(1));

    let details = app.details_page_opt.as_ref().expect("details page");
    assert_eq!(details.photo.id, 102694);
    assert_eq!(*details.photo, fallback::photos()[1]);
    assert!(Arc::ptr_eq(&details.photo, &app.gallery.photo(1).unwrap()));
    assert_eq!(app.navigator.depth(), 2);
}

#[test]
fn back_returns_to_the_same_gallery_without_refetch() {
    let mut app = loaded();
    let before: Vec<Arc<PhotoRecord>> = app.gallery.photos().to_vec();

    let _ = handlers::update(&mut app, Message::SelectPhoto(2));
    assert!(app.details_page_opt.is_some());
    let _ = handlers::update(&mut app, Message::Back);

    assert!(app.details_page_opt.is_none());
    assert_eq!(app.navigator.depth(), 1);
    assert_eq!(app.gallery.generation(), 0);
    assert_eq!(app.next_generation, 1);
    assert!(!app.gallery.is_loading());
    assert_eq!(app.gallery.photos().len(), before.len());
    for (after, before) in app.gallery.photos().iter().zip(&before) {
        assert!(Arc::ptr_eq(after, before));
    }
}

#[test]
fn select_past_the_batch_keeps_the_gallery() {
    let mut app = loaded();
    let _ = handlers::update(&mut app, Message::SelectPhoto(3));

    assert!(app.details_page_opt.is_none());
    assert_eq!(app.navigator.depth(), 1);
}

#[test]
fn back_on_the_gallery_does_nothing() {
    let mut app = loaded();
    let _ = handlers::update(&mut app, Message::Back);

    assert!(app.details_page_opt.is_none());
    assert_eq!(app.navigator.depth(), 1);
    assert_eq!(app.gallery.photos().len(), 3);
}
