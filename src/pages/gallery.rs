//! Gallery page: the fetched batch shown as a grid of photo cards.

use std::collections::HashMap;
use std::sync::Arc;

use cosmic::iced::{Alignment, Length};
use cosmic::{Element, cosmic_theme, widget};

use crate::Message;
use crate::constants::{CARD_MIN_WIDTH, EARTH_DATE};
use crate::feed::FeedBatch;
use crate::fl;
use crate::photo::PhotoRecord;
use crate::ui::{GridMetrics, photo_card_view};

#[derive(Clone, Debug)]
pub enum GalleryState {
    Loading,
    Ready(FeedBatch),
}

#[derive(Debug)]
pub struct GalleryPage {
    generation: u64,
    state: GalleryState,
    images: HashMap<u64, widget::image::Handle>,
    loading_frame: usize,
}

impl GalleryPage {
    /// A freshly mounted page waits for the fetch tagged with `generation`.
    pub fn mount(generation: u64) -> Self {
        Self {
            generation,
            state: GalleryState::Loading,
            images: HashMap::new(),
            loading_frame: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GalleryState::Loading)
    }

    /// Store the fetch result. Returns `false`, leaving the page untouched, when the
    /// result belongs to another mount or the page is already ready.
    pub fn complete(&mut self, generation: u64, batch: FeedBatch) -> bool {
        if generation != self.generation {
            log::warn!(
                "dropping {} photos for gallery {} after remount as {}",
                batch.len(),
                generation,
                self.generation
            );
            return false;
        }
        match self.state {
            GalleryState::Loading => {
                self.state = GalleryState::Ready(batch);
                true
            }
            GalleryState::Ready(_) => {
                log::warn!("gallery {} already has photos", generation);
                false
            }
        }
    }

    pub fn batch(&self) -> Option<&FeedBatch> {
        match &self.state {
            GalleryState::Loading => None,
            GalleryState::Ready(batch) => Some(batch),
        }
    }

    pub fn photos(&self) -> &[Arc<PhotoRecord>] {
        self.batch().map_or(&[][..], |batch| batch.photos.as_slice())
    }

    pub fn photo(&self, index: usize) -> Option<Arc<PhotoRecord>> {
        self.photos().get(index).cloned()
    }

    pub fn tick(&mut self) {
        if self.is_loading() {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }

    pub fn image(&self, id: u64) -> Option<&widget::image::Handle> {
        self.images.get(&id)
    }

    /// Photos whose image has not arrived yet.
    pub fn missing_images(&self) -> impl Iterator<Item = &Arc<PhotoRecord>> {
        self.photos()
            .iter()
            .filter(|photo| !self.images.contains_key(&photo.id))
    }

    /// Keep image bytes only if `url` still belongs to photo `id`.
    pub fn set_image(&mut self, id: u64, url: &str, data: Vec<u8>) -> bool {
        let matches = self
            .photos()
            .iter()
            .any(|photo| photo.id == id && photo.image_url == url);
        if matches {
            self.images.insert(id, widget::image::Handle::from_bytes(data));
        }
        matches
    }

    /// Rover name and Earth date shown under the title, taken from the first photo.
    pub fn subtitle_fields(&self) -> (&str, &str) {
        self.photos().first().map_or(("Curiosity", EARTH_DATE), |photo| {
            (photo.rover.name.as_str(), photo.earth_date.as_str())
        })
    }

    pub fn view(&self, spacing: cosmic_theme::Spacing, grid_width: usize) -> Element<'_, Message> {
        let cosmic_theme::Spacing {
            space_m,
            space_s,
            space_xxs,
            ..
        } = spacing;

        let batch = match &self.state {
            GalleryState::Loading => return self.loading_view(spacing),
            GalleryState::Ready(batch) => batch,
        };

        let (rover, date) = self.subtitle_fields();

        let mut column = widget::column::with_capacity(4)
            .padding([0, space_s, space_m, space_s])
            .spacing(space_xxs)
            .width(Length::Fill);
        column = column.push(widget::text::title2(fl!("gallery-title")));
        column = column.push(widget::text::body(fl!(
            "gallery-subtitle",
            rover = rover,
            date = date
        )));

        if batch.is_empty() {
            column = column.push(widget::text::body(fl!("no-photos")));
        } else {
            column = column.push(self.grid_view(&batch.photos, spacing, grid_width));
        }

        column.into()
    }

    fn grid_view<'a>(
        &'a self,
        photos: &'a [Arc<PhotoRecord>],
        spacing: cosmic_theme::Spacing,
        grid_width: usize,
    ) -> Element<'a, Message> {
        let GridMetrics {
            cols,
            item_width,
            column_spacing,
        } = GridMetrics::new(
            grid_width,
            CARD_MIN_WIDTH + 2 * spacing.space_s as usize,
            spacing.space_xxs,
        );

        let mut grid = widget::grid();
        let mut col = 0;
        for (index, photo) in photos.iter().enumerate() {
            if col >= cols {
                grid = grid.insert_row();
                col = 0;
            }
            grid = grid.push(
                widget::mouse_area(photo_card_view(
                    photo,
                    self.image(photo.id),
                    &spacing,
                    item_width,
                ))
                .on_press(Message::SelectPhoto(index)),
            );
            col += 1;
        }
        grid.column_spacing(column_spacing)
            .row_spacing(column_spacing)
            .into()
    }

    fn loading_view(&self, spacing: cosmic_theme::Spacing) -> Element<'_, Message> {
        // One sweep of the bar every 100 ticks.
        let progress = (self.loading_frame % 100) as f32;
        widget::container(
            widget::column::with_children(vec![
                widget::container(
                    widget::progress_bar(0.0..=100.0, progress).height(Length::Fixed(4.0)),
                )
                .width(Length::Fixed(240.0))
                .into(),
                widget::text::title4(fl!("loading-photos")).into(),
                widget::text::caption(fl!("loading-connecting")).into(),
            ])
            .spacing(spacing.space_s)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding(spacing.space_xl)
        .into()
    }
}
