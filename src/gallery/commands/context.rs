//! # Command Context
//!
//! Read-only state handed to commands so they can decide relevance.

/// Snapshot of the controller state for commands
#[derive(Debug, Clone, Default)]
pub struct GallerySnapshot {
    pub search_text: String,
    pub loaded: bool,
}

/// Base context available to all commands
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub state: GallerySnapshot,
}

impl CommandContext {
    pub fn new(state: GallerySnapshot) -> Self {
        Self { state }
    }
}
