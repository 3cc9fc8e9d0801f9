//! Pages and context drawer pages

pub mod details;
pub use details::DetailsPage;

pub mod gallery;
pub use gallery::{GalleryPage, GalleryState};

/// Context page for the context drawer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextPage {
    Settings,
}
