//! UI-related modules

pub mod grid;
pub use grid::GridMetrics;

pub mod cards;
pub use cards::photo_card_view;
