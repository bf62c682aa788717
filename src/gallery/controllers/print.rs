//! Non-interactive mode: load once, apply the search, write the listing.

use crate::config::{OutputFormat, Settings};
use crate::gallery::controllers::interaction::InteractionController;
use crate::gallery::services::{CountryService, CountrySource, LoadMessage};
use crate::gallery::views::plain::{write_json, write_plain};
use crate::gallery::views::GalleryProjection;
use anyhow::{anyhow, Result};
use std::io::Write;
use std::sync::Arc;

pub async fn print_gallery<W: Write>(
    settings: &Settings,
    source: Arc<dyn CountrySource>,
    out: &mut W,
) -> Result<()> {
    let service = CountryService::new(source);
    let mut interaction =
        InteractionController::new(settings.locale()).with_search(settings.initial_search());

    interaction.handle_load_message(LoadMessage::from(service.fetch().await));

    if let Some(message) = interaction.error_message() {
        return Err(anyhow!("{message}"));
    }

    let empty = GalleryProjection::NoResults;
    let projection = interaction.projection().unwrap_or(&empty);
    tracing::info!(
        shown = projection.entries().len(),
        total = interaction.store().len(),
        "printing gallery"
    );

    match settings.output_format() {
        OutputFormat::Plain => write_plain(projection, out),
        OutputFormat::Json => write_json(projection, out),
    }
}
