//! End-to-end gallery behavior driven through the real controller with
//! injected key events and an in-memory screen.

mod common;

use common::{ctrl, fixture_records, key, typed};
use crossterm::event::{Event, KeyCode};
use flagline::config::Settings;
use flagline::gallery::io::{MockEventStream, MockRenderStream};
use flagline::gallery::views::NO_RESULTS_MESSAGE;
use flagline::{AppController, StaticCountrySource};
use std::sync::Arc;

type TestApp = AppController<MockEventStream, MockRenderStream>;

async fn run_with(events: Vec<Event>) -> TestApp {
    let mut app = AppController::with_io_streams(
        &Settings::default(),
        Arc::new(StaticCountrySource::new(fixture_records())),
        MockEventStream::new(events),
        MockRenderStream::new(),
    )
    .unwrap();
    app.load().await;
    app.run().await.unwrap();
    app
}

fn shown_names(app: &TestApp) -> Vec<String> {
    app.interaction()
        .projection()
        .map(|p| p.common_names().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Order in which the given names appear on screen
fn screen_order(app: &TestApp, names: &[&str]) -> Vec<String> {
    let screen = app.render_stream().screen_text();
    let mut found: Vec<(usize, &str)> = names
        .iter()
        .filter_map(|name| screen.find(name).map(|pos| (pos, *name)))
        .collect();
    found.sort();
    found.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[tokio::test]
async fn initial_listing_should_be_alphabetical() {
    let app = run_with(vec![]).await;

    assert_eq!(shown_names(&app), vec!["Apple", "Mango", "Zebra"]);
    assert_eq!(
        screen_order(&app, &["Zebra", "Apple", "Mango"]),
        vec!["Apple", "Mango", "Zebra"]
    );

    let screen = app.render_stream().screen_text();
    assert!(screen.contains("[Ctrl+A] Sort alphabetically   [Ctrl+P] Sort by population"));
    assert!(screen.contains("Showing 3 of 3 countries"));
    assert!(screen.contains("Population: 1,500"));
}

#[tokio::test]
async fn typing_should_filter_case_insensitively() {
    let app = run_with(typed("ZEB")).await;

    assert_eq!(app.interaction().search_text(), "ZEB");
    assert_eq!(shown_names(&app), vec!["Zebra"]);
    assert!(app.render_stream().screen_text().contains("Showing 1 of 3 countries"));
}

#[tokio::test]
async fn search_should_match_official_names() {
    let app = run_with(typed("kingdom")).await;
    assert_eq!(shown_names(&app), vec!["Apple"]);
}

#[tokio::test]
async fn unmatched_search_should_show_placeholder() {
    let app = run_with(typed("xyz")).await;

    let projection = app.interaction().projection().unwrap();
    assert!(projection.is_no_results());
    assert_eq!(projection.node_count(), 1);
    assert!(app.render_stream().screen_text().contains(NO_RESULTS_MESSAGE));
}

#[tokio::test]
async fn backspace_and_clear_should_widen_results() {
    let mut events = typed("zq");
    events.push(key(KeyCode::Backspace));
    let app = run_with(events).await;
    assert_eq!(shown_names(&app), vec!["Zebra"]);

    let mut events = typed("zq");
    events.push(key(KeyCode::Esc));
    let app = run_with(events).await;
    assert_eq!(app.interaction().search_text(), "");
    assert_eq!(shown_names(&app), vec!["Apple", "Mango", "Zebra"]);
}

#[tokio::test]
async fn population_toggle_should_alternate_direction_and_label() {
    let app = run_with(vec![ctrl('p')]).await;
    assert_eq!(shown_names(&app), vec!["Zebra", "Mango", "Apple"]);
    assert_eq!(app.interaction().population_label(), "Sort by population ↓");
    assert!(app
        .render_stream()
        .screen_text()
        .contains("[Ctrl+P] Sort by population ↓"));

    let app = run_with(vec![ctrl('p'), ctrl('p')]).await;
    assert_eq!(shown_names(&app), vec!["Apple", "Mango", "Zebra"]);
    assert_eq!(app.interaction().population_label(), "Sort by population ↑");
}

#[tokio::test]
async fn alphabetical_toggle_should_reverse_order() {
    let app = run_with(vec![key(KeyCode::F(2))]).await;

    assert_eq!(shown_names(&app), vec!["Zebra", "Mango", "Apple"]);
    assert_eq!(app.interaction().alphabetical_label(), "Sort alphabetically ↑");
    assert_eq!(
        screen_order(&app, &["Apple", "Mango", "Zebra"]),
        vec!["Zebra", "Mango", "Apple"]
    );
}

#[tokio::test]
async fn sort_should_survive_later_searches() {
    let mut events = vec![ctrl('p')];
    events.extend(typed("a"));
    let app = run_with(events).await;

    // "a" matches all three; the canonical population order stays in effect
    assert_eq!(shown_names(&app), vec!["Zebra", "Mango", "Apple"]);
}

#[tokio::test]
async fn search_then_sort_should_keep_filter() {
    let mut events = typed("an");
    events.push(ctrl('a'));
    let app = run_with(events).await;

    assert_eq!(app.interaction().search_text(), "an");
    assert_eq!(shown_names(&app), vec!["Mango"]);
    assert_eq!(app.interaction().store().len(), 3);
}

#[tokio::test]
async fn ctrl_c_should_stop_processing_input() {
    let mut events = vec![ctrl('c')];
    events.extend(typed("zebra"));
    let app = run_with(events).await;

    assert!(app.should_quit());
    assert_eq!(app.interaction().search_text(), "");
    assert!(!app.render_stream().is_alternate_screen());
    assert!(!app.render_stream().is_raw_mode());
}

#[tokio::test]
async fn resize_should_redraw_for_new_size() {
    let app = run_with(vec![Event::Resize(40, 12)]).await;

    let screen = app.render_stream().screen_text();
    assert!(screen.contains("Apple"));
    assert!(screen.contains("Showing 3 of 3"));
}
