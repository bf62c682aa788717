//! # Gallery Application Controller
//!
//! Orchestrates the gallery: kicks off the one-shot load, runs the event
//! loop, routes key events through the command registry into the
//! interaction controller and redraws after every change.

use crate::config::Settings;
use crate::gallery::commands::{CommandContext, CommandRegistry};
use crate::gallery::controllers::interaction::{InteractionController, Outcome};
use crate::gallery::io::{EventStream, RenderStream};
use crate::gallery::models::LoadPhase;
use crate::gallery::services::{CountryService, CountrySource, LoadMessage};
use crate::gallery::views::{TerminalRenderer, ViewRenderer};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    interaction: InteractionController,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    country_service: CountryService,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the controller with injected data source and I/O streams
    pub fn with_io_streams(
        settings: &Settings,
        source: Arc<dyn CountrySource>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let interaction =
            InteractionController::new(settings.locale()).with_search(settings.initial_search());

        tracing::debug!(
            locale = settings.locale().tag(),
            size = ?view_renderer.terminal_size(),
            "gallery controller created"
        );

        Ok(Self {
            interaction,
            view_renderer,
            command_registry: CommandRegistry::new(),
            country_service: CountryService::new(source),
            event_stream,
            should_quit: false,
        })
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn render_stream(&self) -> &RS {
        self.view_renderer.render_stream()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch and apply the dataset, waiting for the result
    pub async fn load(&mut self) {
        let message = LoadMessage::from(self.country_service.fetch().await);
        self.interaction.handle_load_message(message);
    }

    /// Run the application until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;

        let result = self.run_event_loop().await;

        self.view_renderer.cleanup()?;
        result
    }

    async fn run_event_loop(&mut self) -> Result<()> {
        self.render()?;

        if self.interaction.phase() == LoadPhase::Loading {
            self.country_service.spawn_fetch();
        }

        while !self.should_quit {
            if let Some(message) = self.country_service.try_receive() {
                self.interaction.handle_load_message(message);
                self.render()?;
            }

            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => self.handle_key_event(key_event)?,
                    Event::Resize(width, height) => {
                        self.view_renderer.update_size(width, height);
                        self.interaction
                            .clamp_scroll(self.view_renderer.listing_height());
                        self.render()?;
                    }
                    _ => {}
                }
            } else if self.event_stream.is_exhausted() && !self.country_service.is_pending() {
                tracing::debug!("event stream exhausted, leaving event loop");
                break;
            }

            // Let the fetch task make progress on single-threaded runtimes
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(self.interaction.snapshot());
        let events = self.command_registry.process_event(key_event, &context)?;

        let listing_height = self.view_renderer.listing_height();
        let mut needs_render = false;
        for event in events {
            match self.interaction.apply(event, listing_height) {
                Outcome::Render => needs_render = true,
                Outcome::Quit => {
                    self.should_quit = true;
                    return Ok(());
                }
                Outcome::Unchanged => {}
            }
        }

        if needs_render {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.interaction.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::io::{MockEventStream, MockRenderStream, RenderCommand};
    use crate::gallery::models::CountryRecord;
    use crate::gallery::services::{LoadFailure, StaticCountrySource};
    use crate::gallery::views::terminal_renderer::LISTING_TOP;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn source() -> Arc<dyn CountrySource> {
        Arc::new(StaticCountrySource::new(vec![
            CountryRecord::new("Zebra", "Zebra Republic", "https://flags.test/z.svg", 1),
            CountryRecord::new("Apple", "Apple Kingdom", "https://flags.test/a.svg", 2),
        ]))
    }

    fn controller(events: Vec<Event>) -> AppController<MockEventStream, MockRenderStream> {
        AppController::with_io_streams(
            &Settings::default(),
            source(),
            MockEventStream::new(events),
            MockRenderStream::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn run_should_load_in_background_and_render() -> Result<()> {
        let mut app = controller(vec![]);
        app.run().await?;

        assert_eq!(app.interaction().phase(), LoadPhase::Ready);
        let screen = app.render_stream().screen_text();
        let apple = screen.find("Apple").unwrap();
        let zebra = screen.find("Zebra").unwrap();
        assert!(apple < zebra);
        assert!(app.render_stream().has_command(&RenderCommand::LeaveAlternateScreen));
        Ok(())
    }

    #[tokio::test]
    async fn ctrl_c_should_quit() -> Result<()> {
        let mut app = controller(vec![
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            key(KeyCode::Char('z'), KeyModifiers::NONE),
        ]);
        app.load().await;
        app.run().await?;

        assert!(app.should_quit());
        assert_eq!(app.interaction().search_text(), "");
        Ok(())
    }

    #[tokio::test]
    async fn typing_should_filter_listing() -> Result<()> {
        let mut app = controller(vec![key(KeyCode::Char('z'), KeyModifiers::NONE)]);
        app.load().await;
        app.run().await?;

        let screen = app.render_stream().screen_text();
        assert!(screen.contains("Search: z"));
        assert!(screen.contains("Zebra"));
        assert!(!screen.contains("Apple"));
        Ok(())
    }

    #[tokio::test]
    async fn resize_should_clamp_scroll_offset() -> Result<()> {
        let records = (0..6)
            .map(|i| CountryRecord::new(format!("C{i}"), format!("Country {i}"), "", i))
            .collect();

        let mut events = MockEventStream::empty();
        events.push_event(key(KeyCode::End, KeyModifiers::NONE));
        events.push_event(Event::Resize(80, 60));
        events.push_event(key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(events.pending_count(), 3);

        let mut app = AppController::with_io_streams(
            &Settings::default(),
            Arc::new(StaticCountrySource::new(records)),
            events,
            MockRenderStream::with_size((80, 24)),
        )?;
        app.load().await;
        app.run().await?;

        // 30 lines fit in the 55-row listing, so nothing is left to scroll
        assert_eq!(app.interaction().scroll_offset(), 0);
        let lines = app.render_stream().screen_lines();
        assert_eq!(lines[LISTING_TOP as usize], "⚑ Flag of C0 <no image>");
        Ok(())
    }

    #[tokio::test]
    async fn failed_load_should_show_error() -> Result<()> {
        let mut app = AppController::with_io_streams(
            &Settings::default(),
            Arc::new(StaticCountrySource::failing(LoadFailure::Status(500))),
            MockEventStream::empty(),
            MockRenderStream::new(),
        )?;
        app.run().await?;

        assert!(app.interaction().store().is_empty());
        assert!(app
            .render_stream()
            .screen_text()
            .contains("An error has occurred: server responded with status 500"));
        Ok(())
    }
}
