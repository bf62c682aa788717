//! # Commands
//!
//! Commands map key events to [`CommandEvent`]s. The registry asks each
//! command whether it is relevant and executes the first that is; the
//! controller then applies the resulting events.

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod app;
pub mod context;
pub mod events;
pub mod scroll;
pub mod search;
pub mod sort;

pub use app::AppTerminateCommand;
pub use context::{CommandContext, GallerySnapshot};
pub use events::{CommandEvent, ScrollDirection};
pub use scroll::ScrollCommand;
pub use search::{SearchBackspaceCommand, SearchClearCommand, SearchInsertCommand};
pub use sort::SortToggleCommand;

/// A key binding and the events it produces
pub trait Command: Send + Sync {
    /// Check if this command should handle the given key event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name for logging
    fn name(&self) -> &'static str;
}

/// Ordered list of commands; the first relevant one wins
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: vec![
                Box::new(AppTerminateCommand),
                Box::new(SortToggleCommand),
                Box::new(ScrollCommand),
                Box::new(SearchClearCommand),
                Box::new(SearchBackspaceCommand),
                Box::new(SearchInsertCommand),
            ],
        }
    }

    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        // Key release/repeat reports arrive on some platforms; act on presses only
        if event.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Command '{}' handles {:?}", command.name(), event.code);
                return command.execute(event, context);
            }
        }

        tracing::trace!("No command for {:?}", event);
        Ok(vec![])
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
