use cosmic::{Element, widget};

use crate::config::{AppTheme, ScreenConfig};
use crate::fl;
use crate::message::Message;
use crate::pages::ContextPage;

pub fn render_settings<'a>(
    app_themes: &'a [String],
    screen: &ScreenConfig,
) -> Element<'a, Message> {
    let app_theme_selected = match screen.theme {
        AppTheme::Dark => 1,
        AppTheme::Light => 2,
        AppTheme::System => 0,
    };
    widget::settings::view_column(vec![
        widget::settings::section()
            .title(fl!("appearance"))
            .add(
                widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                    app_themes,
                    Some(app_theme_selected),
                    move |index| {
                        Message::AppTheme(match index {
                            1 => AppTheme::Dark,
                            2 => AppTheme::Light,
                            _ => AppTheme::System,
                        })
                    },
                )),
            )
            .add(
                widget::settings::item::builder(fl!("language"))
                    .control(widget::text::body(screen.locale.clone())),
            )
            .into(),
    ])
    .into()
}

pub fn render_header_end<'a>() -> Vec<Element<'a, Message>> {
    vec![
        widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
            .on_press(Message::ToggleContextPage(ContextPage::Settings))
            .into(),
    ]
}
