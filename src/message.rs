use cosmic::cosmic_theme;
use cosmic::iced::widget::scrollable;

use crate::config::{AppTheme, Config};
use crate::feed::FeedBatch;
use crate::pages::ContextPage;

/// Messages that are used specifically by our [`App`](crate::app::App).
#[derive(Clone, Debug)]
pub enum Message {
    AppTheme(AppTheme),
    Back,
    Config(Config),
    /// Fetch result for the gallery mounted with this generation
    FeedLoaded(u64, FeedBatch),
    LoadingTick,
    PhotoImage(u64, String, Vec<u8>),
    ScrollView(scrollable::Viewport),
    SelectPhoto(usize),
    SystemThemeModeChange(cosmic_theme::ThemeMode),
    ToggleContextPage(ContextPage),
}
