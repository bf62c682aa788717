//! Read-only snapshot of everything the renderer draws in one pass

use crate::gallery::models::LoadPhase;
use crate::gallery::views::projection::GalleryProjection;

/// Borrowed view of the controller state for one render pass
#[derive(Debug, Clone, Copy)]
pub struct GalleryView<'a> {
    pub search_text: &'a str,
    pub alphabetical_label: &'a str,
    pub population_label: &'a str,
    /// `None` until a load has succeeded
    pub projection: Option<&'a GalleryProjection>,
    pub total_count: usize,
    pub phase: LoadPhase,
    pub error_message: Option<&'a str>,
    pub scroll_offset: usize,
}

impl GalleryView<'_> {
    /// Entries currently shown in the listing
    pub fn shown_count(&self) -> usize {
        self.projection.map_or(0, |p| p.entries().len())
    }
}
