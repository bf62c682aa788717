//! # Views Module
//!
//! Rendering is split in two: [`projection`] computes what the listing shows
//! without any surface, [`terminal_renderer`] and [`plain`] write it out.

pub mod ansi_escape_codes;
pub mod gallery_view;
pub mod number_format;
pub mod plain;
pub mod projection;
pub mod terminal_renderer;

pub use gallery_view::GalleryView;
pub use number_format::NumberLocale;
pub use projection::{GalleryEntry, GalleryProjection, LineStyle, ProjectedLine, NO_RESULTS_MESSAGE};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
