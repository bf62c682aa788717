//! # Country Gallery
//!
//! Model-view-controller split of the interactive gallery.

pub mod commands;
pub mod controllers;
pub mod io;
pub mod models;
pub mod query;
pub mod services;
pub mod views;

pub use controllers::{print_gallery, AppController, InteractionController};
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use models::{CountryRecord, DataStore, SortDirection, SortKey};
pub use services::{CountrySource, HttpCountrySource, LoadFailure, StaticCountrySource};
