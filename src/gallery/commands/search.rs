//! # Search Commands
//!
//! Editing of the free-text search field. Every keystroke produces an event;
//! there is no debouncing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Type a printable character into the search field
pub struct SearchInsertCommand;

impl Command for SearchInsertCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::SearchInsertRequested { ch }]),
            _ => Ok(vec![]),
        }
    }

    fn name(&self) -> &'static str {
        "SearchInsert"
    }
}

/// Delete the last character (Backspace)
pub struct SearchBackspaceCommand;

impl Command for SearchBackspaceCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Backspace)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.search_text.is_empty() {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::SearchBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "SearchBackspace"
    }
}

/// Clear the search field (Esc or Ctrl+U)
pub struct SearchClearCommand;

impl Command for SearchClearCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Esc => true,
            KeyCode::Char('u') => event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.search_text.is_empty() {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::SearchClearRequested])
    }

    fn name(&self) -> &'static str {
        "SearchClear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::commands::GallerySnapshot;

    fn context_with_search(text: &str) -> CommandContext {
        CommandContext::new(GallerySnapshot {
            search_text: text.to_string(),
            loaded: true,
        })
    }

    #[test]
    fn insert_should_accept_plain_and_shifted_chars() {
        let context = context_with_search("");
        let cmd = SearchInsertCommand;

        assert!(cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)));
        assert!(cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT)));
        assert!(!cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert!(!cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));

        let events = cmd
            .execute(KeyEvent::new(KeyCode::Char('ö'), KeyModifiers::NONE), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::SearchInsertRequested { ch: 'ö' }]);
    }

    #[test]
    fn backspace_on_empty_search_should_do_nothing() {
        let event = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        let cmd = SearchBackspaceCommand;

        assert_eq!(
            cmd.execute(event, &context_with_search("")).unwrap(),
            vec![CommandEvent::NoAction]
        );
        assert_eq!(
            cmd.execute(event, &context_with_search("sw")).unwrap(),
            vec![CommandEvent::SearchBackspaceRequested]
        );
    }

    #[test]
    fn clear_should_respond_to_escape_and_ctrl_u() {
        let context = context_with_search("sw");
        let cmd = SearchClearCommand;

        assert!(cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(!cmd.is_relevant(&context, &KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE)));
        assert_eq!(
            cmd.execute(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &context)
                .unwrap(),
            vec![CommandEvent::SearchClearRequested]
        );
    }
}
