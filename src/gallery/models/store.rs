//! # Data Store
//!
//! Owns the canonical sequence of loaded countries and the two direction
//! toggles. The store is passed explicitly to whoever needs it; there is no
//! ambient instance.

use super::country::CountryRecord;

/// Direction of a sort toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The key a sort toggle orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Alphabetical,
    Population,
}

/// Where the one-shot load currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed,
}

pub const DEFAULT_ALPHABETICAL_DIRECTION: SortDirection = SortDirection::Ascending;
pub const DEFAULT_POPULATION_DIRECTION: SortDirection = SortDirection::Descending;

/// In-memory store of every country returned by the data source
#[derive(Debug, Clone)]
pub struct DataStore {
    countries: Vec<CountryRecord>,
    alphabetical_direction: SortDirection,
    population_direction: SortDirection,
    loaded: bool,
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            countries: Vec::new(),
            alphabetical_direction: DEFAULT_ALPHABETICAL_DIRECTION,
            population_direction: DEFAULT_POPULATION_DIRECTION,
            loaded: false,
        }
    }

    /// The canonical sequence in its current order
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Populate the store from a successful load.
    ///
    /// The store is populated at most once; later calls are ignored and
    /// return `false`.
    pub fn populate(&mut self, records: Vec<CountryRecord>) -> bool {
        if self.loaded {
            tracing::warn!("data store already populated, ignoring {} records", records.len());
            return false;
        }
        tracing::info!("data store populated with {} countries", records.len());
        self.countries = records;
        self.loaded = true;
        true
    }

    /// Replace the canonical sequence with a reordering of itself.
    pub fn replace_countries(&mut self, records: Vec<CountryRecord>) {
        debug_assert_eq!(records.len(), self.countries.len());
        self.countries = records;
    }

    pub fn alphabetical_direction(&self) -> SortDirection {
        self.alphabetical_direction
    }

    pub fn set_alphabetical_direction(&mut self, direction: SortDirection) {
        self.alphabetical_direction = direction;
    }

    pub fn population_direction(&self) -> SortDirection {
        self.population_direction
    }

    pub fn set_population_direction(&mut self, direction: SortDirection) {
        self.population_direction = direction;
    }

    pub fn direction(&self, key: SortKey) -> SortDirection {
        match key {
            SortKey::Alphabetical => self.alphabetical_direction,
            SortKey::Population => self.population_direction,
        }
    }

    /// Put both toggles back to alphabetical ascending, population descending
    pub fn reset_directions(&mut self) {
        self.alphabetical_direction = DEFAULT_ALPHABETICAL_DIRECTION;
        self.population_direction = DEFAULT_POPULATION_DIRECTION;
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
