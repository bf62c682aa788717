//! # flagline - Searchable Country Gallery for the Terminal
//!
//! Loads every country once from a REST endpoint and shows the flags, names
//! and populations as a scrollable listing with an incremental search field
//! and two sort toggles.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   KeyEvent   ┌──────────────┐ CommandEvent ┌──────────────────┐
//! │ EventStream │─────────────▶│   Commands   │─────────────▶│   Interaction    │
//! └─────────────┘              └──────────────┘              │   Controller     │
//!                                                            │                  │
//! ┌─────────────┐  LoadMessage ┌──────────────┐              │ - DataStore      │
//! │CountrySource│─────────────▶│CountryService│─────────────▶│ - search text    │
//! └─────────────┘   (mpsc)     └──────────────┘              │ - query pipeline │
//!                                                            └────────┬─────────┘
//!                                                                     │ GalleryView
//!                                                                     ▼
//!                                                            ┌──────────────────┐
//!                                                            │ TerminalRenderer │
//!                                                            │ / plain / json   │
//!                                                            └──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod gallery;
pub mod logging;

// Re-export main types for easy access
pub use gallery::*;
