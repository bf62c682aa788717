//! # Mock I/O Implementations for Testing
//!
//! Pre-programmed input and a render stream that records commands and keeps
//! a simple screen model (one string per row, escape sequences stripped).

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::{BTreeMap, VecDeque};
use std::io::Write;
use std::time::Duration;

/// Event stream backed by a queue
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

/// Render stream that records everything written to it
#[derive(Debug)]
pub struct MockRenderStream {
    commands: Vec<RenderCommand>,
    rows: BTreeMap<u16, String>,
    cursor_row: u16,
    in_escape: bool,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            rows: BTreeMap::new(),
            cursor_row: 0,
            in_escape: false,
            terminal_size: size,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    pub fn get_commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    /// Visible screen rows from the top, escape sequences stripped
    pub fn screen_lines(&self) -> Vec<String> {
        let Some(last) = self.rows.keys().next_back().copied() else {
            return Vec::new();
        };
        (0..=last)
            .map(|row| self.rows.get(&row).cloned().unwrap_or_default())
            .collect()
    }

    /// The whole visible screen joined by newlines
    pub fn screen_text(&self) -> String {
        self.screen_lines().join("\n")
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn record(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    fn put_visible(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\x1b' {
                self.in_escape = true;
            } else if self.in_escape {
                // CSI sequences end on their first letter
                if ch.is_ascii_alphabetic() {
                    self.in_escape = false;
                }
            } else if ch == '\n' {
                self.cursor_row += 1;
            } else if ch != '\r' {
                self.rows.entry(self.cursor_row).or_default().push(ch);
            }
        }
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let text = String::from_utf8_lossy(buf).to_string();
        self.put_visible(&text);
        self.record(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        self.rows.clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        self.cursor_row = y;
        if x == 0 {
            self.rows.remove(&y);
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        self.cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}
