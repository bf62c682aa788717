//! # Interaction Controller
//!
//! Binds user input to the query pipeline. Every re-render starts from the
//! store's canonical sequence, filters it with the current search text and
//! projects the result. Sort toggles additionally flip their direction flag
//! and write a re-sorted canonical sequence back to the store first.

use crate::gallery::commands::{CommandEvent, GallerySnapshot, ScrollDirection};
use crate::gallery::models::{CountryRecord, DataStore, LoadPhase, SortDirection, SortKey};
use crate::gallery::query::{filter_by_substring, sort_by_name, sort_by_population};
use crate::gallery::services::{LoadFailure, LoadMessage};
use crate::gallery::views::terminal_renderer::max_scroll_offset;
use crate::gallery::views::{GalleryProjection, GalleryView, NumberLocale};

pub const ALPHABETICAL_LABEL: &str = "Sort alphabetically";
pub const POPULATION_LABEL: &str = "Sort by population";

/// Label for a toggle after it moved to `direction`.
///
/// The arrow shows the direction just moved to: `↑` after switching to
/// descending, `↓` after switching to ascending.
pub fn toggle_label(base: &str, direction: SortDirection) -> String {
    match direction {
        SortDirection::Descending => format!("{base} ↑"),
        SortDirection::Ascending => format!("{base} ↓"),
    }
}

/// What the caller should do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Quit,
    Unchanged,
}

pub struct InteractionController {
    store: DataStore,
    search_text: String,
    locale: NumberLocale,
    phase: LoadPhase,
    error_message: Option<String>,
    alphabetical_label: String,
    population_label: String,
    projection: Option<GalleryProjection>,
    scroll_offset: usize,
}

impl InteractionController {
    pub fn new(locale: NumberLocale) -> Self {
        Self {
            store: DataStore::new(),
            search_text: String::new(),
            locale,
            phase: LoadPhase::Loading,
            error_message: None,
            alphabetical_label: ALPHABETICAL_LABEL.to_string(),
            population_label: POPULATION_LABEL.to_string(),
            projection: None,
            scroll_offset: 0,
        }
    }

    /// Start with search text already entered
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn alphabetical_label(&self) -> &str {
        &self.alphabetical_label
    }

    pub fn population_label(&self) -> &str {
        &self.population_label
    }

    /// The current projection; `None` until a load succeeded
    pub fn projection(&self) -> Option<&GalleryProjection> {
        self.projection.as_ref()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            search_text: self.search_text.clone(),
            loaded: self.store.is_loaded(),
        }
    }

    pub fn view(&self) -> GalleryView<'_> {
        GalleryView {
            search_text: &self.search_text,
            alphabetical_label: &self.alphabetical_label,
            population_label: &self.population_label,
            projection: self.projection.as_ref(),
            total_count: self.store.len(),
            phase: self.phase,
            error_message: self.error_message.as_deref(),
            scroll_offset: self.scroll_offset,
        }
    }

    pub fn handle_load_message(&mut self, message: LoadMessage) {
        match message {
            LoadMessage::Loaded(records) => self.complete_load(records),
            LoadMessage::Failed(failure) => self.fail_load(&failure),
        }
    }

    /// Populate the store, sorted alphabetically ascending with both
    /// toggles at their defaults, and project it.
    pub fn complete_load(&mut self, records: Vec<CountryRecord>) {
        if self.store.is_loaded() {
            tracing::warn!("ignoring second load of {} countries", records.len());
            return;
        }

        self.store.reset_directions();
        self.alphabetical_label = ALPHABETICAL_LABEL.to_string();
        self.population_label = POPULATION_LABEL.to_string();

        let sorted = sort_by_name(&records, self.store.alphabetical_direction());
        self.store.populate(sorted);
        self.phase = LoadPhase::Ready;
        self.error_message = None;
        self.refresh();
    }

    /// Report a failed load on the error surface. The store stays empty.
    pub fn fail_load(&mut self, failure: &LoadFailure) {
        tracing::error!("loading countries failed: {}", failure);
        self.phase = LoadPhase::Failed;
        self.error_message = Some(format!("An error has occurred: {failure}"));
        self.projection = None;
    }

    /// Recompute the projection from the canonical sequence and search text
    pub fn refresh(&mut self) {
        self.scroll_offset = 0;
        if self.phase != LoadPhase::Ready {
            return;
        }

        let filtered = filter_by_substring(self.store.countries(), &self.search_text);
        tracing::debug!(
            search = %self.search_text,
            matches = filtered.len(),
            "refreshing gallery"
        );
        self.projection = Some(GalleryProjection::project(&filtered, &self.locale));
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.refresh();
    }

    pub fn insert_search_char(&mut self, ch: char) {
        self.search_text.push(ch);
        self.refresh();
    }

    pub fn backspace_search(&mut self) {
        self.search_text.pop();
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
        self.refresh();
    }

    /// Flip `key`'s direction, re-sort the canonical sequence with it and
    /// re-apply the current search
    pub fn toggle_sort(&mut self, key: SortKey) {
        let direction = self.store.direction(key).toggled();

        let sorted = match key {
            SortKey::Alphabetical => {
                self.store.set_alphabetical_direction(direction);
                self.alphabetical_label = toggle_label(ALPHABETICAL_LABEL, direction);
                sort_by_name(self.store.countries(), direction)
            }
            SortKey::Population => {
                self.store.set_population_direction(direction);
                self.population_label = toggle_label(POPULATION_LABEL, direction);
                sort_by_population(self.store.countries(), direction)
            }
        };

        tracing::debug!(?key, ?direction, "re-sorting canonical sequence");
        self.store.replace_countries(sorted);
        self.refresh();
    }

    pub fn scroll(&mut self, direction: ScrollDirection, listing_height: usize) {
        let line_count = self.projection.as_ref().map_or(0, |p| p.line_count());
        let max = max_scroll_offset(line_count, listing_height);
        let page = listing_height.max(1);

        self.scroll_offset = match direction {
            ScrollDirection::LineUp => self.scroll_offset.saturating_sub(1),
            ScrollDirection::LineDown => (self.scroll_offset + 1).min(max),
            ScrollDirection::PageUp => self.scroll_offset.saturating_sub(page),
            ScrollDirection::PageDown => (self.scroll_offset + page).min(max),
            ScrollDirection::Top => 0,
            ScrollDirection::Bottom => max,
        };
    }

    /// Pull the offset back inside the listing after the viewport changed size
    pub fn clamp_scroll(&mut self, listing_height: usize) {
        let line_count = self.projection.as_ref().map_or(0, |p| p.line_count());
        self.scroll_offset = self
            .scroll_offset
            .min(max_scroll_offset(line_count, listing_height));
    }

    /// Apply one command event
    pub fn apply(&mut self, event: CommandEvent, listing_height: usize) -> Outcome {
        match event {
            CommandEvent::SearchInsertRequested { ch } => self.insert_search_char(ch),
            CommandEvent::SearchBackspaceRequested => self.backspace_search(),
            CommandEvent::SearchClearRequested => self.clear_search(),
            CommandEvent::SortToggleRequested { key } => self.toggle_sort(key),
            CommandEvent::ScrollRequested { direction } => {
                let before = self.scroll_offset;
                self.scroll(direction, listing_height);
                if before == self.scroll_offset {
                    return Outcome::Unchanged;
                }
            }
            CommandEvent::QuitRequested => return Outcome::Quit,
            CommandEvent::NoAction => return Outcome::Unchanged,
        }
        Outcome::Render
    }
}
