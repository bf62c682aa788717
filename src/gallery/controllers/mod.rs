//! # Controllers Module
//!
//! Controllers coordinate the models, the query pipeline and the views.
//! [`InteractionController`] owns the gallery state and reacts to command
//! events; [`AppController`] drives it from a terminal event loop and
//! [`print_gallery`] drives it once for non-interactive output.

pub mod app_controller;
pub mod interaction;
pub mod print;

pub use app_controller::AppController;
pub use interaction::{toggle_label, InteractionController, Outcome};
pub use print::print_gallery;
