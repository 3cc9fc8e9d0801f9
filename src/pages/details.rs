//! Photo details page module

use std::sync::Arc;

use cosmic::iced::{ContentFit, Length};
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::Message;
use crate::constants::DETAILS_IMAGE_HEIGHT;
use crate::fl;
use crate::photo::PhotoRecord;

#[derive(Clone, Debug)]
pub struct DetailsPage {
    pub(crate) photo: Arc<PhotoRecord>,
}

impl DetailsPage {
    pub fn new(photo: Arc<PhotoRecord>) -> Self {
        Self { photo }
    }

    /// Descriptive text built from the record, one paragraph per entry.
    pub fn description(&self) -> Vec<String> {
        let photo = &self.photo;
        vec![
            fl!(
                "details-description",
                rover = photo.rover.name.as_str(),
                camera = photo.camera.full_name.as_str(),
                date = photo.earth_date.as_str()
            ),
            fl!("details-instrument", code = photo.camera.code.as_str()),
        ]
    }

    pub fn camera_fields(&self) -> Vec<(String, String)> {
        vec![
            (fl!("camera-name"), self.photo.camera.full_name.clone()),
            (fl!("camera-code"), self.photo.camera.code.clone()),
        ]
    }

    pub fn mission_fields(&self) -> Vec<(String, String)> {
        vec![
            (fl!("rover"), self.photo.rover.name.clone()),
            (fl!("status"), self.photo.rover.status.clone()),
            (fl!("earth-date"), self.photo.earth_date.clone()),
            (fl!("photo-id-label"), self.photo.id.to_string()),
        ]
    }

    fn section<'a>(
        title: String,
        fields: Vec<(String, String)>,
        spacing: &cosmic_theme::Spacing,
    ) -> Element<'a, Message> {
        let mut list = widget::list_column()
            .divider_padding(0)
            .list_item_padding([spacing.space_xxs, 0])
            .style(theme::Container::Transparent);
        for (label, value) in fields {
            list = list.add(
                widget::settings::item::builder(label).control(widget::text::body(value)),
            );
        }
        widget::column::with_children(vec![widget::text::title4(title).into(), list.into()])
            .spacing(spacing.space_xxxs)
            .into()
    }

    pub fn view<'a>(
        &'a self,
        image_opt: Option<&'a widget::image::Handle>,
        spacing: cosmic_theme::Spacing,
    ) -> Element<'a, Message> {
        let cosmic_theme::Spacing {
            space_m,
            space_s,
            space_xxs,
            space_xxxs,
            ..
        } = spacing;

        let mut column = widget::column::with_capacity(7)
            .padding([0, space_s, space_m, space_s])
            .spacing(space_m)
            .width(Length::Fill);
        column = column.push(
            widget::button::text(fl!("back"))
                .leading_icon(
                    widget::icon::from_name("go-previous-symbolic")
                        .size(16)
                        .handle(),
                )
                .on_press(Message::Back),
        );

        column = column.push(
            widget::column::with_children(vec![
                widget::text::title2(fl!("details-title")).into(),
                widget::text::title4(fl!("details-heading")).into(),
                widget::text(fl!(
                    "details-captured-by",
                    rover = self.photo.rover.name.as_str()
                ))
                .into(),
            ])
            .spacing(space_xxxs),
        );

        let image_height = Length::Fixed(DETAILS_IMAGE_HEIGHT);
        let image_element: Element<_> = match image_opt {
            Some(image) => widget::container(
                widget::image(image.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(image_height),
            )
            .center_x(Length::Fill)
            .into(),
            None => widget::container(widget::text::caption(fl!("image-unavailable")))
                .center_x(Length::Fill)
                .center_y(image_height)
                .class(theme::Container::Card)
                .into(),
        };
        column = column.push(image_element);

        column = column.push(Self::section(
            fl!("camera-information"),
            self.camera_fields(),
            &spacing,
        ));
        column = column.push(Self::section(
            fl!("mission-details"),
            self.mission_fields(),
            &spacing,
        ));

        let mut about = widget::column::with_capacity(3).spacing(space_xxs);
        about = about.push(widget::text::title4(fl!("about-image")));
        for paragraph in self.description() {
            about = about.push(widget::text::body(paragraph));
        }
        column = column.push(about);

        column.into()
    }
}
