//! # Gallery Projection
//!
//! The surface-independent half of rendering: turns a sequence of records
//! into the entries and lines that any surface draws. Terminal output and
//! plain `--print` output are both built from this.

use crate::gallery::models::CountryRecord;
use crate::gallery::views::number_format::NumberLocale;
use serde::Serialize;

/// Placeholder shown instead of an empty listing
pub const NO_RESULTS_MESSAGE: &str = "No matches found :(";

/// Lines each entry occupies in the listing, including the spacer
pub const LINES_PER_ENTRY: usize = 5;

/// One visual entry in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    pub flag_url: String,
    /// Textual fallback describing the flag image
    pub flag_alt: String,
    pub common_name: String,
    pub official_name: String,
    /// Population with locale thousands separators
    pub population: String,
}

impl GalleryEntry {
    pub fn from_record(record: &CountryRecord, locale: &NumberLocale) -> Self {
        let flag_alt = record
            .flag_alt
            .clone()
            .unwrap_or_else(|| format!("Flag of {}", record.common_name));

        Self {
            flag_url: record.flag_image_url.clone(),
            flag_alt,
            common_name: record.common_name.clone(),
            official_name: record.official_name.clone(),
            population: locale.format_integer(record.population),
        }
    }

    pub fn flag_line(&self) -> String {
        if self.flag_url.is_empty() {
            format!("⚑ {} <no image>", self.flag_alt)
        } else {
            format!("⚑ {} <{}>", self.flag_alt, self.flag_url)
        }
    }

    pub fn official_line(&self) -> String {
        format!("({})", self.official_name)
    }

    pub fn population_line(&self) -> String {
        format!("Population: {}", self.population)
    }
}

/// How a projected line should be styled by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Flag,
    CommonName,
    OfficialName,
    Population,
    Spacer,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedLine {
    pub style: LineStyle,
    pub text: String,
}

impl ProjectedLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// What the listing area shows for a given input sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryProjection {
    Entries(Vec<GalleryEntry>),
    NoResults,
}

impl GalleryProjection {
    /// Project records in input order. An empty input projects to
    /// [`GalleryProjection::NoResults`], never to an empty entry list.
    pub fn project(records: &[CountryRecord], locale: &NumberLocale) -> Self {
        if records.is_empty() {
            return GalleryProjection::NoResults;
        }
        GalleryProjection::Entries(
            records
                .iter()
                .map(|record| GalleryEntry::from_record(record, locale))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        match self {
            GalleryProjection::Entries(entries) => entries,
            GalleryProjection::NoResults => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, GalleryProjection::NoResults)
    }

    /// Visual nodes in the listing: one per entry, or the single placeholder
    pub fn node_count(&self) -> usize {
        match self {
            GalleryProjection::Entries(entries) => entries.len(),
            GalleryProjection::NoResults => 1,
        }
    }

    pub fn common_names(&self) -> Vec<&str> {
        self.entries()
            .iter()
            .map(|entry| entry.common_name.as_str())
            .collect()
    }

    pub fn line_count(&self) -> usize {
        match self {
            GalleryProjection::Entries(entries) => entries.len() * LINES_PER_ENTRY,
            GalleryProjection::NoResults => 1,
        }
    }

    /// Flatten into styled lines, top to bottom
    pub fn lines(&self) -> Vec<ProjectedLine> {
        match self {
            GalleryProjection::NoResults => {
                vec![ProjectedLine::new(LineStyle::Placeholder, NO_RESULTS_MESSAGE)]
            }
            GalleryProjection::Entries(entries) => entries
                .iter()
                .flat_map(|entry| {
                    [
                        ProjectedLine::new(LineStyle::Flag, entry.flag_line()),
                        ProjectedLine::new(LineStyle::CommonName, entry.common_name.clone()),
                        ProjectedLine::new(LineStyle::OfficialName, entry.official_line()),
                        ProjectedLine::new(LineStyle::Population, entry.population_line()),
                        ProjectedLine::new(LineStyle::Spacer, ""),
                    ]
                })
                .collect(),
        }
    }
}
