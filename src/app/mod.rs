mod data;
mod handlers;
mod views;

#[cfg(test)]
mod app_tests;

use cosmic::{
    Application, ApplicationExt, Element,
    app::{Core, Task, context_drawer},
    cosmic_config, cosmic_theme, executor,
    iced::{Alignment, Length, Size, Subscription, widget::scrollable},
    theme, widget,
};
use std::{collections::HashMap, sync::Arc};

use crate::cli::Flags;
use crate::config::{Config, ScreenConfig};
use crate::constants::MAX_GRID_WIDTH;
use crate::feed::PhotoFeedService;
use crate::fl;
use crate::localize;
use crate::message::Message;
use crate::navigation::{Navigator, Screen};
use crate::pages::{ContextPage, DetailsPage, GalleryPage};
use crate::scroll_context::ScrollContext;

pub struct App {
    pub(crate) core: Core,
    pub(crate) config_handler: Option<cosmic_config::Config>,
    pub(crate) config: Config,
    pub(crate) locale_override: Option<String>,
    pub(crate) screen: ScreenConfig,
    pub(crate) app_themes: Vec<String>,
    pub(crate) context_page: ContextPage,
    pub(crate) feed: Arc<PhotoFeedService>,
    pub(crate) gallery: GalleryPage,
    pub(crate) next_generation: u64,
    pub(crate) navigator: Navigator,
    pub(crate) details_page_opt: Option<DetailsPage>,
    pub(crate) scrollable_id: widget::Id,
    pub(crate) scroll_views: HashMap<ScrollContext, scrollable::Viewport>,
}

impl App {
    /// Mount a fresh gallery and start its only fetch.
    fn mount_gallery(&mut self) -> Task<Message> {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.gallery = GalleryPage::mount(generation);
        data::fetch_batch_task(self.feed.clone(), generation)
    }

    /// Rebuild the details page from the top of the navigation stack.
    pub(crate) fn sync_details_page(&mut self) {
        self.details_page_opt = match self.navigator.current() {
            Screen::Home => None,
            Screen::PhotoDetail(photo) => Some(DetailsPage::new(photo.clone())),
        };
    }

    pub(crate) fn scroll_context(&self) -> ScrollContext {
        ScrollContext::for_route(self.navigator.current().route())
    }

    pub(crate) fn update_scroll(&mut self) -> Task<Message> {
        let scroll_context = self.scroll_context();
        // Clear unused scroll contexts
        for remove_context in scroll_context.unused_contexts() {
            self.scroll_views.remove(remove_context);
        }
        scrollable::scroll_to(
            self.scrollable_id.clone(),
            match self.scroll_views.get(&scroll_context) {
                Some(viewport) => viewport.absolute_offset(),
                None => scrollable::AbsoluteOffset::default(),
            },
        )
    }

    pub(crate) fn update_config(&mut self) -> Task<Message> {
        self.screen.theme = self.config.app_theme;
        cosmic::command::set_theme(self.config.app_theme.theme())
    }

    /// Select bundles for the configured language and refresh translated state.
    pub(crate) fn update_locale(&mut self) -> Task<Message> {
        localize::localize(ScreenConfig::requested_locale(
            &self.config,
            self.locale_override.as_deref(),
        ));
        self.screen = ScreenConfig::new(
            &self.config,
            self.locale_override.as_deref(),
            localize::current_language(),
        );
        self.app_themes = vec![fl!("match-desktop"), fl!("dark"), fl!("light")];
        self.update_title()
    }

    pub(crate) fn handle_config_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_config_message(self, message)
    }

    pub(crate) fn handle_feed_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_feed_message(self, message)
    }

    pub(crate) fn handle_navigation_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_navigation_message(self, message)
    }

    fn update_title(&mut self) -> Task<Message> {
        if let Some(window_id) = &self.core.main_window_id() {
            self.set_window_title(fl!("app-name"), *window_id)
        } else {
            Task::none()
        }
    }

    fn view_responsive(&self, size: Size) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let cosmic_theme::Spacing { space_s, .. } = spacing;
        let grid_width = (size.width - 2.0 * space_s as f32).floor().max(0.0) as usize;

        match &self.details_page_opt {
            Some(details_page) => {
                details_page.view(self.gallery.image(details_page.photo.id), spacing)
            }
            None => self.gallery.view(spacing, grid_width),
        }
    }
}

/// Implement [`Application`] to integrate with COSMIC.
impl Application for App {
    /// Multithreaded async executor to use with the app.
    type Executor = executor::multi::Executor;

    /// Argument received
    type Flags = Flags;

    /// Message type specific to our [`App`].
    type Message = Message;

    /// The unique application ID to supply to the window manager.
    const APP_ID: &'static str = "io.github.mars_gallery.MarsGallery";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Creates the application and starts the photo fetch.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let screen = ScreenConfig::new(
            &flags.config,
            flags.locale_override.as_deref(),
            localize::current_language(),
        );
        log::info!("starting with locale {} and theme {:?}", screen.locale, screen.theme);

        let mut app = App {
            core,
            config_handler: flags.config_handler,
            config: flags.config,
            locale_override: flags.locale_override,
            screen,
            app_themes: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            context_page: ContextPage::Settings,
            feed: Arc::new(PhotoFeedService::with_defaults()),
            gallery: GalleryPage::mount(0),
            next_generation: 0,
            navigator: Navigator::new(),
            details_page_opt: None,
            scrollable_id: widget::Id::unique(),
            scroll_views: HashMap::new(),
        };

        let command = Task::batch([app.update_title(), app.mount_gallery()]);
        (app, command)
    }

    fn on_escape(&mut self) -> Task<Message> {
        if self.core.window.show_context {
            // Close context drawer if open
            self.core.window.show_context = false;
            Task::none()
        } else {
            self.update(Message::Back)
        }
    }

    /// Handle application events here.
    fn update(&mut self, message: Self::Message) -> Task<Message> {
        handlers::update(self, message)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::Settings => context_drawer::context_drawer(
                views::render_settings(&self.app_themes, &self.screen),
                Message::ToggleContextPage(ContextPage::Settings),
            )
            .title(fl!("settings")),
        })
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        views::render_header_end()
    }

    /// Creates a view after each update.
    fn view(&self) -> Element<'_, Self::Message> {
        widget::responsive(move |mut size| {
            size.width = size.width.min(MAX_GRID_WIDTH);
            widget::scrollable(
                widget::container(
                    widget::container(self.view_responsive(size)).max_width(MAX_GRID_WIDTH),
                )
                .align_x(Alignment::Center)
                .width(Length::Fill),
            )
            .id(self.scrollable_id.clone())
            .on_scroll(Message::ScrollView)
            .into()
        })
        .into()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        handlers::subscription(self)
    }
}
