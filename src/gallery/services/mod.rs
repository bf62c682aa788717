//! # Services Layer
//!
//! Services wrap external resources. The gallery has exactly one: the
//! country data source.

pub mod countries;

pub use countries::{
    CountryService, CountrySource, HttpCountrySource, LoadFailure, LoadMessage,
    StaticCountrySource,
};
