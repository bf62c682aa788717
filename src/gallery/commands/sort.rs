//! # Sort Toggle Commands
//!
//! `Ctrl+A` / `F2` flips alphabetical order, `Ctrl+P` / `F3` flips
//! population order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::gallery::models::SortKey;

pub struct SortToggleCommand;

impl SortToggleCommand {
    fn key_for(event: &KeyEvent) -> Option<SortKey> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::F(2) => Some(SortKey::Alphabetical),
            KeyCode::F(3) => Some(SortKey::Population),
            KeyCode::Char('a') if ctrl => Some(SortKey::Alphabetical),
            KeyCode::Char('p') if ctrl => Some(SortKey::Population),
            _ => None,
        }
    }
}

impl Command for SortToggleCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        Self::key_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::key_for(&event)
            .map(|key| vec![CommandEvent::SortToggleRequested { key }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "SortToggle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_toggle_should_map_keys() {
        let context = CommandContext::default();
        let cases = [
            (KeyCode::Char('a'), KeyModifiers::CONTROL, SortKey::Alphabetical),
            (KeyCode::F(2), KeyModifiers::NONE, SortKey::Alphabetical),
            (KeyCode::Char('p'), KeyModifiers::CONTROL, SortKey::Population),
            (KeyCode::F(3), KeyModifiers::NONE, SortKey::Population),
        ];

        for (code, modifiers, key) in cases {
            let event = KeyEvent::new(code, modifiers);
            assert!(SortToggleCommand.is_relevant(&context, &event));
            assert_eq!(
                SortToggleCommand.execute(event, &context).unwrap(),
                vec![CommandEvent::SortToggleRequested { key }]
            );
        }
    }

    #[test]
    fn plain_letters_should_not_toggle() {
        let context = CommandContext::default();
        let event = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert!(!SortToggleCommand.is_relevant(&context, &event));
    }
}
