use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::*;
use crate::selection::{SelectionController, TapKind};
use crate::store::{MemoryStore, SavedSelection, StoreHandle};

const FOX: &str = "The quick brown fox jumps over the lazy dog. The fox runs.";
const WAIT: Duration = Duration::from_secs(2);

fn app(text: &str) -> App<'static> {
	App::new(SelectionController::new(text), UiOptions::default())
}

fn app_with_store(text: &str, store: MemoryStore) -> App<'static> {
	let handle = StoreHandle::spawn(Box::new(store)).unwrap();
	app(text).with_store(handle)
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<Outcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn click(app: &mut App<'_>, offset: u16, at: Instant) -> Option<TapKind> {
	let area = app.text_area;
	let mouse = MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: area.x + offset,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	};
	app.handle_mouse(mouse, at)
}

fn wait_until(app: &mut App<'_>, done: impl Fn(&App<'_>) -> bool) {
	let deadline = Instant::now() + WAIT;
	while Instant::now() < deadline {
		app.pump_store_events();
		if done(app) {
			return;
		}
		thread::sleep(Duration::from_millis(10));
	}
	panic!("condition not reached; notice = {:?}", app.notice());
}

#[test]
fn renders_title_and_text() {
	let mut app = app(FOX);
	let view = render(&mut app);
	assert!(view.contains("textpin"), "view:\n{view}");
	assert!(view.contains("The quick brown fox"), "view:\n{view}");
	assert!(!view.contains("Pinned"), "view:\n{view}");
}

#[test]
fn double_clicks_pin_words_and_show_banner() {
	let mut app = app(FOX);
	render(&mut app);
	let t0 = Instant::now();

	assert_eq!(click(&mut app, 4, t0), Some(TapKind::Single));
	assert_eq!(
		click(&mut app, 4, t0 + Duration::from_millis(100)),
		Some(TapKind::Double)
	);
	assert_eq!(app.pinned, Some(4..9));
	assert!(app.can_save);

	let later = t0 + Duration::from_secs(2);
	click(&mut app, 35, later);
	click(&mut app, 35, later + Duration::from_millis(100));
	assert_eq!(app.pinned, Some(4..39));
	assert_eq!(app.controller.selected_text(), "quick brown fox jumps over the lazy");

	let view = render(&mut app);
	assert!(view.contains("Pinned 4..39"), "view:\n{view}");
}

#[test]
fn triple_click_clears_pins_and_banner() {
	let mut app = app(FOX);
	render(&mut app);
	let t0 = Instant::now();
	for step in 0..3 {
		click(&mut app, 5, t0 + Duration::from_millis(100 * step));
	}
	assert_eq!(app.pinned, None);
	assert!(app.controller.selection().is_empty());
	assert!(!app.can_save);
	assert!(!render(&mut app).contains("Pinned"));
}

#[test]
fn clicks_outside_the_text_are_ignored() {
	let mut app = app(FOX);
	render(&mut app);
	let mouse = MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 0,
		row: 0,
		modifiers: KeyModifiers::NONE,
	};
	assert_eq!(app.handle_mouse(mouse, Instant::now()), None);
}

#[test]
fn search_is_debounced_and_counts_matches() {
	let mut app = app(FOX);
	press(&mut app, KeyCode::Char('/'));
	assert_eq!(app.focus(), Focus::Search);
	type_text(&mut app, "fox");

	app.tick(Instant::now());
	assert_eq!(app.controller.match_count(), 0);

	app.tick(Instant::now() + DEFAULT_DEBOUNCE);
	assert_eq!(app.controller.match_count(), 2);
	assert_eq!(app.controller.selection(), 16..19);
	assert!(render(&mut app).contains("1/2"));

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.selection(), 49..52);
	assert!(render(&mut app).contains("2/2"));

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.selection(), 16..19);
}

#[test]
fn enter_runs_a_pending_search_without_skipping_the_first_match() {
	let mut app = app(FOX);
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "FOX");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.search_position(), Some((1, 2)));
}

#[test]
fn collapsing_search_clears_highlights_and_counter() {
	let mut app = app(FOX);
	app.controller.annotate(0..3, 9);
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "the");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.match_count(), 3);

	press(&mut app, KeyCode::Esc);
	assert_eq!(app.focus(), Focus::Text);
	assert!(!app.search_open);
	assert!(!app.show_counter);
	assert_eq!(app.controller.match_count(), 0);
	assert_eq!(app.controller.highlights().len(), 1);
	assert!(!render(&mut app).contains("0/0"));
}

#[test]
fn initial_query_opens_the_search_bar() {
	let options = UiOptions {
		initial_query: "fox".into(),
		..UiOptions::default()
	};
	let mut app = App::new(SelectionController::new(FOX), options);
	assert!(app.search_open);
	assert_eq!(app.controller.match_count(), 2);
	assert!(render(&mut app).contains("1/2"));
}

#[test]
fn save_needs_a_selection() {
	let mut app = app_with_store(FOX, MemoryStore::new());
	press(&mut app, KeyCode::Char('s'));
	assert_eq!(app.focus(), Focus::Text);
	assert_eq!(app.notice(), Some("Select some text to save"));
}

#[test]
fn saving_a_pinned_word_uses_the_default_name() {
	let mut app = app_with_store(FOX, MemoryStore::new());
	press(&mut app, KeyCode::Char('p'));
	assert_eq!(app.controller.selected_text(), "The");

	press(&mut app, KeyCode::Char('s'));
	assert_eq!(app.focus(), Focus::SaveName);
	assert_eq!(app.name_input.text(), "The");
	press(&mut app, KeyCode::Enter);

	wait_until(&mut app, |app| app.library.records.len() == 1);
	assert_eq!(app.library.records[0].text, "The");
	assert_eq!(app.library.records[0].name, "The");
}

#[test]
fn empty_library_closes_with_a_notice() {
	let mut app = app_with_store(FOX, MemoryStore::new());
	press(&mut app, KeyCode::Char('l'));
	assert_eq!(app.focus(), Focus::Library);
	wait_until(&mut app, |app| app.focus() == Focus::Text);
	assert_eq!(app.notice(), Some("No saved selections"));
}

#[test]
fn loading_a_saved_selection_resets_pins_and_search() {
	let record = SavedSelection::new("greeting", "hello there");
	let mut app = app_with_store(FOX, MemoryStore::with_records([record]));
	press(&mut app, KeyCode::Char('p'));
	assert!(app.pinned.is_some());
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "fox");
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Tab);

	press(&mut app, KeyCode::Char('l'));
	wait_until(&mut app, |app| !app.library.records.is_empty());
	assert!(render(&mut app).contains("greeting"));

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.text(), "hello there");
	assert_eq!(app.pinned, None);
	assert_eq!(app.controller.match_count(), 0);
	assert!(!app.search_open);
	assert_eq!(app.focus(), Focus::Text);
	assert_eq!(app.notice(), Some("Loaded \"greeting\""));
}

#[test]
fn click_after_loading_before_redraw_stays_in_the_new_text() {
	let record = SavedSelection::new("short", "hi");
	let mut app = app_with_store(FOX, MemoryStore::with_records([record]));
	render(&mut app);
	press(&mut app, KeyCode::Char('l'));
	wait_until(&mut app, |app| !app.library.records.is_empty());
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.controller.text(), "hi");

	let t0 = Instant::now();
	assert_eq!(click(&mut app, 30, t0), Some(TapKind::Single));
	assert_eq!(app.controller.selection(), 2..2);
	assert_eq!(click(&mut app, 1, t0 + Duration::from_millis(600)), Some(TapKind::Single));
	assert_eq!(app.controller.selection(), 1..1);
}

#[test]
fn deleting_the_last_record_closes_the_library() {
	let record = SavedSelection::new("only", "text");
	let mut app = app_with_store(FOX, MemoryStore::with_records([record.clone()]));
	press(&mut app, KeyCode::Char('l'));
	wait_until(&mut app, |app| !app.library.records.is_empty());

	press(&mut app, KeyCode::Char('d'));
	assert_eq!(app.focus(), Focus::ConfirmDelete(record.id));
	assert!(render(&mut app).contains("Delete \"only\"?"));
	press(&mut app, KeyCode::Char('y'));

	wait_until(&mut app, |app| app.library.records.is_empty());
	assert_eq!(app.focus(), Focus::Text);
}

#[test]
fn renaming_keeps_the_id() {
	let record = SavedSelection::new("draft", "text");
	let mut app = app_with_store(FOX, MemoryStore::with_records([record.clone()]));
	press(&mut app, KeyCode::Char('l'));
	wait_until(&mut app, |app| !app.library.records.is_empty());

	press(&mut app, KeyCode::Char('r'));
	assert_eq!(app.focus(), Focus::Rename(record.id));
	for _ in 0.."draft".len() {
		press(&mut app, KeyCode::Backspace);
	}
	type_text(&mut app, "final");
	press(&mut app, KeyCode::Enter);

	wait_until(&mut app, |app| {
		app.library
			.records
			.first()
			.is_some_and(|record| record.name == "final")
	});
	assert_eq!(app.library.records[0].id, record.id);
}

#[test]
fn theme_toggles() {
	let mut app = app(FOX);
	press(&mut app, KeyCode::Char('t'));
	assert_eq!(app.theme_name(), ThemeName::Dark);
	assert_eq!(app.theme, DARK);
}

#[test]
fn quitting_reports_the_selection() {
	let mut app = app(FOX);
	press(&mut app, KeyCode::Char('p'));
	let outcome = press(&mut app, KeyCode::Enter).unwrap();
	assert!(outcome.accepted);
	assert_eq!(outcome.selected_text, "The");
	assert_eq!(outcome.session.pins.start, Some(0));

	let outcome = press(&mut app, KeyCode::Char('q')).unwrap();
	assert!(!outcome.accepted);
}

#[test]
fn navigation_scrolls_the_current_match_into_view() {
	let text = (0..30)
		.map(|line| format!("line {line}"))
		.collect::<Vec<_>>()
		.join("\n");
	let mut app = app(&format!("{text}\nneedle"));
	render(&mut app);
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "needle");
	press(&mut app, KeyCode::Enter);

	let view = render(&mut app);
	assert!(view.contains("needle"), "view:\n{view}");
	assert!(app.scroll > 0);
}

#[test]
fn event_loop_handles_queued_keys_before_disconnect() {
	let mut app = app(FOX);
	let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
	let (tx, rx) = mpsc::channel();
	tx.send(Event::Key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)))
		.unwrap();
	tx.send(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
		.unwrap();
	drop(tx);

	let outcome = app.event_loop(&mut terminal, &rx).unwrap();
	assert!(outcome.accepted);
	assert_eq!(outcome.selected_text, "The");
}

#[test]
fn event_loop_reports_disconnect_as_an_error() {
	let mut app = app(FOX);
	let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
	let (tx, rx) = mpsc::channel::<Event>();
	drop(tx);

	let err = app.event_loop(&mut terminal, &rx).unwrap_err();
	assert!(err.to_string().contains("disconnected"));
}
