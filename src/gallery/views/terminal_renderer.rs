//! # Terminal Renderer
//!
//! Writes a [`GalleryView`] onto a [`RenderStream`].
//!
//! ```text
//! row 0        flagline · countries of the world
//! row 1        Search: swe█
//! row 2        [Ctrl+A] Sort alphabetically ↓   [Ctrl+P] Sort by population
//! row 3        ────────────────────────────────
//! rows 4..h-1  listing (scrolls)
//! row h-1      status line / error surface
//! ```

use crate::gallery::io::RenderStream;
use crate::gallery::models::LoadPhase;
use crate::gallery::views::ansi_escape_codes::{
    BOLD, CLEAR_TO_END_OF_LINE, DIM, FG_BRIGHT_BLACK, FG_CYAN, FG_RED, RESET, REVERSE,
};
use crate::gallery::views::gallery_view::GalleryView;
use crate::gallery::views::projection::{GalleryProjection, LineStyle, ProjectedLine};
use anyhow::Result;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE_ROW: u16 = 0;
pub const SEARCH_ROW: u16 = 1;
pub const TOGGLE_ROW: u16 = 2;
pub const RULE_ROW: u16 = 3;
pub const LISTING_TOP: u16 = 4;

/// Rows available to the listing for a terminal of `terminal_height` rows
pub fn listing_height(terminal_height: u16) -> usize {
    (terminal_height as usize)
        .saturating_sub(LISTING_TOP as usize + 1)
        .max(1)
}

/// Largest useful scroll offset for a listing of `line_count` lines
pub fn max_scroll_offset(line_count: usize, listing_height: usize) -> usize {
    line_count.saturating_sub(listing_height)
}

/// Cut `text` so it occupies at most `width` terminal columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Keep the end of `text` within `width` columns, so the latest input stays visible
pub fn tail_to_width(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    text[start..].to_string()
}

/// Trait for rendering the gallery
pub trait ViewRenderer {
    /// Prepare the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything
    fn render_full(&mut self, view: &GalleryView) -> Result<()>;

    /// Redraw only the listing area, replacing whatever was there
    fn render_gallery(&mut self, projection: &GalleryProjection, scroll_offset: usize)
        -> Result<()>;

    /// Redraw the status line, which doubles as the error surface
    fn render_status_bar(&mut self, view: &GalleryView) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// View renderer over any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let terminal_size = stream.get_size()?;
        Ok(Self {
            stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn listing_height(&self) -> usize {
        listing_height(self.terminal_size.1)
    }

    pub fn render_stream(&self) -> &RS {
        &self.stream
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1).max(LISTING_TOP + 1)
    }

    /// Move to the start of `row`, write `text` wrapped in `style`, clear the rest
    fn write_row(&mut self, row: u16, style: &str, text: &str) -> Result<()> {
        let text = truncate_to_width(text, self.width());
        let content = if style.is_empty() {
            text
        } else {
            format!("{style}{text}{RESET}")
        };
        self.write_raw_row(row, &content)
    }

    /// Write pre-styled content as a single chunk
    fn write_raw_row(&mut self, row: u16, content: &str) -> Result<()> {
        self.stream.move_cursor(0, row)?;
        self.stream
            .write_all(format!("{content}{CLEAR_TO_END_OF_LINE}").as_bytes())?;
        Ok(())
    }

    fn render_header(&mut self, view: &GalleryView) -> Result<()> {
        self.write_raw_row(
            TITLE_ROW,
            &format!("{BOLD}flagline{RESET} · countries of the world"),
        )?;

        let search = tail_to_width(
            view.search_text,
            self.width().saturating_sub("Search: ".len() + 1),
        );
        self.write_raw_row(SEARCH_ROW, &format!("Search: {search}{REVERSE} {RESET}"))?;

        let toggles = format!(
            "[Ctrl+A] {}   [Ctrl+P] {}",
            view.alphabetical_label, view.population_label
        );
        self.write_row(TOGGLE_ROW, "", &toggles)?;

        let rule = "─".repeat(self.width());
        self.write_row(RULE_ROW, FG_BRIGHT_BLACK, &rule)
    }

    fn render_line(&mut self, row: u16, line: &ProjectedLine) -> Result<()> {
        let style = match line.style {
            LineStyle::Flag => FG_BRIGHT_BLACK,
            LineStyle::CommonName => BOLD,
            LineStyle::OfficialName | LineStyle::Spacer => "",
            LineStyle::Population => FG_CYAN,
            LineStyle::Placeholder => DIM,
        };
        self.write_row(row, style, &line.text)
    }

    fn clear_listing(&mut self) -> Result<()> {
        for offset in 0..self.listing_height() {
            self.write_row(LISTING_TOP + offset as u16, "", "")?;
        }
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        self.stream.hide_cursor()?;
        Ok(())
    }

    fn render_full(&mut self, view: &GalleryView) -> Result<()> {
        self.stream.hide_cursor()?;
        self.stream.clear_screen()?;
        self.render_header(view)?;

        match view.projection {
            Some(projection) => self.render_gallery(projection, view.scroll_offset)?,
            None => self.clear_listing()?,
        }

        self.render_status_bar(view)?;
        self.stream.flush()?;
        Ok(())
    }

    fn render_gallery(
        &mut self,
        projection: &GalleryProjection,
        scroll_offset: usize,
    ) -> Result<()> {
        let lines = projection.lines();
        let height = self.listing_height();
        let offset = scroll_offset.min(max_scroll_offset(lines.len(), height));

        tracing::trace!(
            entries = projection.entries().len(),
            offset,
            height,
            "rendering gallery"
        );

        for row in 0..height {
            let screen_row = LISTING_TOP + row as u16;
            match lines.get(offset + row) {
                Some(line) => self.render_line(screen_row, line)?,
                None => self.write_row(screen_row, "", "")?,
            }
        }
        Ok(())
    }

    fn render_status_bar(&mut self, view: &GalleryView) -> Result<()> {
        let row = self.status_row();

        if let Some(message) = view.error_message {
            return self.write_row(row, FG_RED, message);
        }

        match view.phase {
            LoadPhase::Loading => self.write_row(row, DIM, "Loading countries..."),
            LoadPhase::Ready => {
                let status = format!(
                    "Showing {} of {} countries · ↑/↓ PgUp/PgDn scroll · Ctrl+C quit",
                    view.shown_count(),
                    view.total_count
                );
                self.write_row(row, DIM, &status)
            }
            LoadPhase::Failed => self.write_row(row, "", ""),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()?;
        Ok(())
    }
}
