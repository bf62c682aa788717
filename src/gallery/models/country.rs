//! # Country Records
//!
//! The record type loaded from the data source and the lenient conversion
//! from the untyped JSON payload. The payload is never trusted: a record
//! without a usable common name is skipped, every other missing field falls
//! back to an empty or zero value.

use serde_json::Value;

/// One country as displayed in the gallery. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,
    pub flag_image_url: String,
    /// Accessible description of the flag as provided by the data source
    pub flag_alt: Option<String>,
    pub population: u64,
}

impl CountryRecord {
    pub fn new(
        common_name: impl Into<String>,
        official_name: impl Into<String>,
        flag_image_url: impl Into<String>,
        population: u64,
    ) -> Self {
        Self {
            common_name: common_name.into(),
            official_name: official_name.into(),
            flag_image_url: flag_image_url.into(),
            flag_alt: None,
            population,
        }
    }

    pub fn with_flag_alt(mut self, alt: impl Into<String>) -> Self {
        self.flag_alt = Some(alt.into());
        self
    }

    /// Build a record from one element of the data source's array.
    ///
    /// Returns `None` when `name.common` is absent or blank. `name.official`
    /// falls back to the common name, `flags.svg` to `flags.png`, and
    /// `population` to zero.
    pub fn from_json(value: &Value) -> Option<Self> {
        let name = value.get("name")?;
        let common_name = non_blank_str(name.get("common"))?;
        let official_name =
            non_blank_str(name.get("official")).unwrap_or_else(|| common_name.clone());

        let flags = value.get("flags");
        let flag_image_url = flags
            .and_then(|f| non_blank_str(f.get("svg")).or_else(|| non_blank_str(f.get("png"))))
            .unwrap_or_default();
        let flag_alt = flags.and_then(|f| non_blank_str(f.get("alt")));

        Some(Self {
            common_name,
            official_name,
            flag_image_url,
            flag_alt,
            population: population_from(value.get("population")),
        })
    }
}

/// Convert the whole payload. Returns `None` if it is not a JSON array.
pub fn records_from_json(payload: &Value) -> Option<Vec<CountryRecord>> {
    let items = payload.as_array()?;
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match CountryRecord::from_json(item) {
            Some(record) => records.push(record),
            None => tracing::warn!(index, "skipping country record without a common name"),
        }
    }

    tracing::debug!(
        accepted = records.len(),
        received = items.len(),
        "converted country payload"
    );
    Some(records)
}

fn non_blank_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn population_from(value: Option<&Value>) -> u64 {
    let Some(value) = value else {
        return 0;
    };

    if let Some(n) = value.as_u64() {
        return n;
    }
    if value.as_i64().is_some() {
        // negative
        return 0;
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}
