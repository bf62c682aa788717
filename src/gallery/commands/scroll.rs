//! # Scroll Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent, ScrollDirection};

/// Arrow keys, PageUp/PageDown, Home/End move the listing viewport
pub struct ScrollCommand;

impl ScrollCommand {
    fn direction_for(code: KeyCode) -> Option<ScrollDirection> {
        match code {
            KeyCode::Up => Some(ScrollDirection::LineUp),
            KeyCode::Down => Some(ScrollDirection::LineDown),
            KeyCode::PageUp => Some(ScrollDirection::PageUp),
            KeyCode::PageDown => Some(ScrollDirection::PageDown),
            KeyCode::Home => Some(ScrollDirection::Top),
            KeyCode::End => Some(ScrollDirection::Bottom),
            _ => None,
        }
    }
}

impl Command for ScrollCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.loaded && Self::direction_for(event.code).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::direction_for(event.code)
            .map(|direction| vec![CommandEvent::ScrollRequested { direction }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "Scroll"
    }
}
