//! Message handler implementations.
//!
//! Each function handles a specific category of messages and is called via
//! thin wrapper methods on the [`App`](crate::app::App) struct.

use crate::app::App;

use crate::message::Message;
use crate::navigation::Route;
use cosmic::Application;
use cosmic::app::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::futures::SinkExt;
use cosmic::iced::{Subscription, stream};
use std::future::pending;

pub fn handle_config_message(app: &mut App, message: Message) -> Task<Message> {
    macro_rules! config_set {
        ($name: ident, $value: expr) => {
            match &app.config_handler {
                Some(config_handler) => {
                    match paste::paste! { app.config.[<set_ $name>](config_handler, $value) } {
                        Ok(_) => {}
                        Err(err) => {
                            log::warn!("failed to save config {:?}: {}", stringify!($name), err);
                        }
                    }
                }
                None => {
                    app.config.$name = $value;
                    log::warn!(
                        "failed to save config {:?}: no config handler",
                        stringify!($name)
                    );
                }
            }
        };
    }

    match message {
        Message::AppTheme(app_theme) => {
            config_set!(app_theme, app_theme);
            app.update_config()
        }
        Message::Config(config) => {
            if config != app.config {
                log::info!("update config");
                let locale_changed = config.locale != app.config.locale;
                app.config = config;
                if locale_changed {
                    Task::batch([app.update_config(), app.update_locale()])
                } else {
                    app.update_config()
                }
            } else {
                Task::none()
            }
        }
        Message::SystemThemeModeChange(_theme_mode) => app.update_config(),
        _ => Task::none(),
    }
}

pub fn handle_feed_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::FeedLoaded(generation, batch) => {
            let len = batch.len();
            let fallback = batch.is_fallback();
            if app.gallery.complete(generation, batch) {
                log::info!(
                    "gallery {} ready with {} photos (fallback: {})",
                    app.gallery.generation(),
                    len,
                    fallback
                );
                app.update_scroll()
            } else {
                Task::none()
            }
        }
        Message::LoadingTick => {
            app.gallery.tick();
            Task::none()
        }
        Message::PhotoImage(id, url, data) => {
            if !app.gallery.set_image(id, &url, data) {
                log::warn!("dropping image {} for photo {} no longer shown", url, id);
            }
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_navigation_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SelectPhoto(index) => {
            let photo = app.gallery.photo(index);
            if photo.is_none() {
                log::error!("failed to find photo with index {}", index);
            }
            match app.navigator.navigate(Route::PhotoDetail, photo) {
                Ok(()) => {
                    app.sync_details_page();
                    app.update_scroll()
                }
                Err(err) => {
                    log::error!("failed to open photo {}: {}", index, err);
                    Task::none()
                }
            }
        }
        Message::Back => {
            if app.navigator.back() {
                log::debug!("back to depth {}", app.navigator.depth());
                app.sync_details_page();
                app.update_scroll()
            } else {
                Task::none()
            }
        }
        Message::ScrollView(viewport) => {
            app.scroll_views.insert(app.scroll_context(), viewport);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::AppTheme(_) | Message::Config(_) | Message::SystemThemeModeChange(_) => {
            app.handle_config_message(message)
        }
        Message::FeedLoaded(_, _) | Message::LoadingTick | Message::PhotoImage(_, _, _) => {
            app.handle_feed_message(message)
        }
        Message::SelectPhoto(_) | Message::Back | Message::ScrollView(_) => {
            app.handle_navigation_message(message)
        }
        Message::ToggleContextPage(context_page) => {
            if app.core.window.show_context && app.context_page == context_page {
                app.core.window.show_context = false;
            } else {
                app.context_page = context_page;
                app.core.window.show_context = true;
            }
            Task::none()
        }
    }
}

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![
        cosmic::cosmic_config::config_subscription(
            std::any::TypeId::of::<crate::config::Config>(),
            crate::app::App::APP_ID.into(),
            crate::config::CONFIG_VERSION,
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading config: {:?}", update.errors);
            }
            Message::Config(update.config)
        }),
        cosmic::cosmic_config::config_subscription::<_, cosmic::cosmic_theme::ThemeMode>(
            std::any::TypeId::of::<cosmic::cosmic_theme::ThemeMode>(),
            cosmic::cosmic_theme::THEME_MODE_ID.into(),
            cosmic::cosmic_theme::ThemeMode::version(),
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading theme mode: {:?}", update.errors);
            }
            Message::SystemThemeModeChange(update.config)
        }),
    ];

    if app.gallery.is_loading() {
        subscriptions.push(
            cosmic::iced::time::every(std::time::Duration::from_millis(16))
                .map(|_| Message::LoadingTick),
        );
    }

    for photo in app.gallery.missing_images() {
        let id = photo.id;
        let url = photo.image_url.clone();
        subscriptions.push(Subscription::run_with_id(
            url.clone(),
            stream::channel(16, move |mut msg_tx| async move {
                log::info!("fetch photo {} from {}", id, url);
                match reqwest::get(&url)
                    .await
                    .and_then(|response| response.error_for_status())
                {
                    Ok(response) => match response.bytes().await {
                        Ok(bytes) => {
                            log::info!("fetched photo from {}: {} bytes", url, bytes.len());
                            let _ = msg_tx
                                .send(Message::PhotoImage(id, url, bytes.to_vec()))
                                .await;
                        }
                        Err(err) => {
                            log::warn!("failed to read photo from {}: {}", url, err);
                        }
                    },
                    Err(err) => {
                        log::warn!("failed to request photo from {}: {}", url, err);
                    }
                }
                pending().await
            }),
        ));
    }

    Subscription::batch(subscriptions)
}
