//! Card rendering for gallery photos

use cosmic::Element;
use cosmic::cosmic_theme;
use cosmic::iced::{Border, Color, ContentFit, Length};
use cosmic::theme;
use cosmic::widget;

use crate::constants::CARD_IMAGE_HEIGHT;
use crate::fl;
use crate::photo::PhotoRecord;

// Import Message type from main
pub use crate::Message;

/// Placeholder shown until the photo bytes arrive
fn image_placeholder<'a>(width: usize) -> Element<'a, Message> {
    widget::container(widget::icon::from_name("image-x-generic-symbolic").size(32))
        .center_x(Length::Fixed(width as f32))
        .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
        .class(theme::Container::custom(|theme| {
            let cosmic = theme.cosmic();
            let base = cosmic.background.component.base;
            widget::container::Style {
                icon_color: Some(cosmic.on_bg_color().into()),
                text_color: Some(cosmic.on_bg_color().into()),
                background: Some(
                    Color::from_rgba(base.red, base.green, base.blue, base.alpha).into(),
                ),
                border: Border {
                    radius: 8.0.into(),
                    width: 1.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                },
                shadow: Default::default(),
            }
        }))
        .into()
}

/// Caption lines under the card heading: camera, rover and Earth date.
fn card_captions(photo: &PhotoRecord) -> Vec<String> {
    vec![
        fl!(
            "camera-caption",
            camera = photo.camera.full_name.as_str(),
            code = photo.camera.code.as_str()
        ),
        fl!("rover-caption", rover = photo.rover.name.as_str()),
        photo.earth_date.clone(),
    ]
}

/// Create a photo card view
pub fn photo_card_view<'a>(
    photo: &'a PhotoRecord,
    image_opt: Option<&'a widget::image::Handle>,
    spacing: &cosmic_theme::Spacing,
    width: usize,
) -> Element<'a, Message> {
    let inner_width = width.saturating_sub(2 * spacing.space_s as usize);
    let image: Element<_> = match image_opt {
        Some(image) => widget::image(image.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(inner_width as f32))
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
        None => image_placeholder(inner_width),
    };

    let mut column = widget::column::with_capacity(5)
        .push(image)
        .push(widget::text::heading(fl!("photo-id", id = photo.id.to_string())))
        .spacing(spacing.space_xxs);
    for caption in card_captions(photo) {
        column = column.push(widget::text::caption(caption));
    }

    widget::container(column)
    .width(width as f32)
    .padding([spacing.space_xs, spacing.space_s])
    .class(theme::Container::Card)
    .into()
}
