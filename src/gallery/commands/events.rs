//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events and the controller applies them.

use crate::gallery::models::SortKey;

/// Direction and size of a listing scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Append a character to the search text
    SearchInsertRequested { ch: char },

    /// Remove the last character of the search text
    SearchBackspaceRequested,

    /// Empty the search text
    SearchClearRequested,

    /// Flip a sort toggle and re-sort the canonical sequence
    SortToggleRequested { key: SortKey },

    /// Move the listing viewport
    ScrollRequested { direction: ScrollDirection },

    /// Request to quit application
    QuitRequested,

    /// No action needed
    NoAction,
}
