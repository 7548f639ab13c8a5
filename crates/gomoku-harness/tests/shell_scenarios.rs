//! End-to-end scenarios for the frame loop.
//!
//! # Test Strategy
//!
//! Each test scripts what a user does, one batch of input per tick:
//! 1. Build the app through the public builders
//! 2. Run it against a [`SimBackend`]
//! 3. Inspect the recorded draw calls
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The backend was torn down exactly once
//! - The presented frames reflect the overlay state
//! - The board and session reflect the input that reached them

use std::time::Duration;

use gomoku_app::{
    App, AppBuilder, AppPhase, CellState, Color, Coordinate, GameBuilder, InputEvent, Key,
    MenuBuilder, MenuOutcome, PlayerKind, RenderBackend, RunError, Seat, SurfaceHandle,
};
use gomoku_harness::{DrawCall, SimBackend, SimBackendError};

fn gomoku_app() -> App {
    let builder = AppBuilder::new()
        .set_windows_size(800, 600)
        .set_menu_title("Gomoku")
        .set_menu_dark_theme()
        .add_menu_button("1 vs 1", |ctx| {
            if let Ok(builder) = GameBuilder::new().set_players_only_human() {
                ctx.start_game(builder.build());
            }
        })
        .add_menu_button("AI vs AI", |ctx| {
            if let Ok(builder) = GameBuilder::new().set_players_only_ai() {
                ctx.start_game(builder.build());
            }
        })
        .add_menu_close_button("Resume")
        .add_menu_quit_button();

    let Ok(app) = builder.build() else {
        unreachable!("valid configuration");
    };
    app
}

/// Centre of `cell` in window units.
fn click(app: &App, x: u32, y: u32) -> InputEvent {
    let rect = app.layout().cell_rect(Coordinate::from_unsigned(x, y)).unwrap_or_default();
    InputEvent::Click(Coordinate::from_unsigned(rect.x + rect.width / 2, rect.y + rect.height / 2))
}

fn key(key: Key) -> InputEvent {
    InputEvent::KeyDown(key)
}

fn has_menu(frame: &[DrawCall]) -> bool {
    frame.iter().any(|c| matches!(c, DrawCall::Menu(_)))
}

fn stones(frame: &[DrawCall], color: Color) -> usize {
    // Stones are the only fills smaller than the window
    frame
        .iter()
        .filter(|c| {
            matches!(c, DrawCall::Fill { color: fill, rect } if *fill == color && rect.width < 800)
        })
        .count()
}

#[test]
fn quit_on_first_tick() {
    let mut backend = SimBackend::scripted([vec![InputEvent::Quit]]);
    let mut app = gomoku_app();

    assert!(app.run(&mut backend).is_ok());

    // The quitting tick still renders once, nothing after it
    assert_eq!(backend.polls(), 1);
    assert_eq!(backend.presents(), 1);
    assert!(backend.last_frame().is_some_and(has_menu));
    assert_eq!(backend.clock(), Duration::ZERO);
    assert_eq!(backend.teardowns(), 1);
    assert_eq!(app.frames_presented(), 1);
    assert_eq!(app.phase(), AppPhase::Stopped);
}

#[test]
fn quit_tick_handles_remaining_events() {
    let mut app = gomoku_app();
    let a = click(&app, 7, 7);
    let mut backend = SimBackend::scripted([vec![InputEvent::Quit, key(Key::Enter), a]]);

    assert!(app.run(&mut backend).is_ok());

    // Game started and stone placed after the quit, both visible in the last frame
    assert_eq!(backend.presents(), 1);
    assert_eq!(app.board().stone_count(), 1);
    let last = backend.last_frame().unwrap_or_default();
    assert!(!has_menu(last));
    assert_eq!(stones(last, Color::BLACK), 1);
}

#[test]
fn menu_shown_until_game_starts() {
    let mut backend = SimBackend::scripted([vec![], vec![key(Key::Enter)], vec![]]);
    let mut app = gomoku_app();

    assert!(app.run(&mut backend).is_ok());

    let frames = backend.frames();
    assert_eq!(frames.len(), 4);
    assert!(has_menu(frames[0]));
    assert!(frames[1..].iter().all(|f| !has_menu(f)));

    let session = app.session();
    let first = session.and_then(|g| g.player(Seat::First)).map(|p| p.kind());
    assert_eq!(first, Some(PlayerKind::Human));
    assert_eq!(session.map(|g| g.turn_count()), Some(0));
}

#[test]
fn menu_instance_matches_configuration() {
    let mut backend = SimBackend::scripted([vec![]]);
    let mut app = gomoku_app();

    assert!(app.run(&mut backend).is_ok());

    let menus = backend.menus_rendered();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].title(), "Gomoku");
    assert_eq!(menus[0].entries(), ["1 vs 1", "AI vs AI", "Resume", "Quit"]);
    assert_eq!(menus[0].size(), Coordinate::from_unsigned(800, 600));
    assert_eq!(backend.surfaces(), [Coordinate::from_unsigned(800, 600)]);
}

#[test]
fn overlay_key_mid_game_blocks_clicks() {
    let mut app = gomoku_app();
    let a = click(&app, 3, 3);
    let b = click(&app, 4, 4);
    let c = click(&app, 5, 5);
    let mut backend = SimBackend::scripted([
        vec![key(Key::Enter)],
        vec![a],
        vec![key(Key::Esc)],
        vec![b, key(Key::Esc)],
        vec![key(Key::Down), key(Key::Down), key(Key::Enter)],
        vec![c],
    ]);

    assert!(app.run(&mut backend).is_ok());

    let frames = backend.frames();
    assert_eq!(frames.len(), 7);
    assert_eq!(stones(frames[1], Color::BLACK), 1);
    // Overlay enabled on the render right after the key
    assert!(has_menu(frames[2]));
    // Pressing the key again leaves it up
    assert!(has_menu(frames[3]));
    // Only Resume closes it
    assert!(!has_menu(frames[4]));
    assert!(!has_menu(frames[5]));

    // The click while the overlay was up never reached the board
    let grid = app.board().grid();
    assert_eq!(grid.get(Coordinate::from_unsigned(3, 3)), Some(CellState::Black));
    assert_eq!(grid.get(Coordinate::from_unsigned(4, 4)), Some(CellState::Empty));
    assert_eq!(grid.get(Coordinate::from_unsigned(5, 5)), Some(CellState::White));
    assert_eq!(app.session().map(|g| g.turn_count()), Some(2));
    assert_eq!(stones(frames[5], Color::WHITE), 1);
}

#[test]
fn quit_button_stops_loop() {
    let mut backend = SimBackend::scripted([
        vec![key(Key::Down)],
        vec![key(Key::Down), key(Key::Down), key(Key::Enter)],
    ]);
    let mut app = gomoku_app();

    assert!(app.run(&mut backend).is_ok());

    assert_eq!(backend.presents(), 2);
    assert_eq!(backend.polls(), 2);
    assert_eq!(app.phase(), AppPhase::Stopped);
    assert!(backend.is_torn_down());
}

#[test]
fn new_game_clears_board() {
    let mut app = gomoku_app();
    let a = click(&app, 0, 0);
    let mut backend = SimBackend::scripted([
        vec![key(Key::Enter), a],
        vec![key(Key::Esc), key(Key::Down), key(Key::Enter)],
    ]);

    assert!(app.run(&mut backend).is_ok());

    assert_eq!(app.board().stone_count(), 0);
    let first = app.session().and_then(|g| g.current_player()).map(|p| p.kind());
    assert_eq!(first, Some(PlayerKind::Ai));
}

#[test]
fn backend_failure_still_tears_down() {
    let mut backend = SimBackend::scripted([vec![], vec![]]);
    backend.fail_next_present();
    let mut app = gomoku_app();

    let result = app.run(&mut backend);

    assert!(matches!(result, Err(RunError::Backend(SimBackendError::Injected("present")))));
    assert_eq!(backend.teardowns(), 1);
    assert_eq!(app.phase(), AppPhase::Stopped);
    assert_eq!(app.frames_presented(), 0);
}

#[test]
fn poll_failure_still_tears_down() {
    let mut backend = SimBackend::new();
    backend.fail_next_poll();
    let mut app = gomoku_app();

    assert!(matches!(app.run(&mut backend), Err(RunError::Backend(_))));
    assert_eq!(backend.teardowns(), 1);
}

#[test]
fn second_run_rejected() {
    let mut backend = SimBackend::new();
    let mut app = gomoku_app();

    assert!(app.run(&mut backend).is_ok());
    assert!(matches!(app.run(&mut backend), Err(RunError::InvalidPhase(AppPhase::Stopped))));
    assert_eq!(backend.teardowns(), 1);
    assert_eq!(backend.surfaces().len(), 1);
}

#[test]
fn virtual_clock_advances_per_frame() {
    let mut backend = SimBackend::new();
    for _ in 0..3 {
        backend.push_tick(vec![]);
    }
    let Ok(mut app) = AppBuilder::new().build() else {
        unreachable!("valid configuration");
    };

    assert!(app.run(&mut backend).is_ok());

    // The quitting frame does not wait for another tick
    assert_eq!(app.frames_presented(), 4);
    assert_eq!(backend.clock(), app.last_dt() * 3);
    assert!(!app.last_dt().is_zero());
}

#[test]
fn modal_menu_requires_instance() {
    let mut backend = SimBackend::new();
    let Ok(mut menu) = MenuBuilder::new().add_quit_button().into_menu() else {
        unreachable!("valid configuration");
    };

    assert!(matches!(menu.run(&mut backend), Err(RunError::MenuNotBuilt(_))));
    assert!(matches!(menu.render(&mut backend), Err(RunError::MenuNotBuilt(_))));
    assert_eq!(backend.polls(), 0);
}

#[test]
fn modal_menu_returns_selection() {
    let mut backend = SimBackend::scripted([vec![], vec![key(Key::Down), key(Key::Enter)]]);
    let surface = backend.surfaces().len() as u32;
    let Ok(mut menu) = MenuBuilder::new()
        .set_title("Gomoku")
        .add_close_button("Resume")
        .add_button("Rules", |_| {})
        .set_surface(SurfaceHandle::new(surface))
        .build()
    else {
        unreachable!("valid configuration");
    };
    assert!(backend.create_surface(menu.size()).is_ok());

    let outcome = menu.run(&mut backend);

    let Ok(MenuOutcome::Selected(selection)) = outcome else {
        unreachable!("second tick selects an entry");
    };
    assert_eq!(selection.name, "Rules");
    assert!(!selection.context.menu_closed());
    assert!(menu.is_enabled());
    assert_eq!(backend.presents(), 1);
    assert_eq!(backend.menus_rendered().len(), 1);
}

#[test]
fn modal_menu_quits_on_signal() {
    let mut backend = SimBackend::new();
    let Ok(mut menu) = MenuBuilder::new().add_quit_button().build() else {
        unreachable!("valid configuration");
    };

    assert!(matches!(menu.run(&mut backend), Ok(MenuOutcome::Quit)));
    assert!(menu.is_built());
}

#[test]
fn modal_menu_without_surface_presents_its_own() {
    let mut backend = SimBackend::scripted([vec![], vec![], vec![]]);
    let Ok(mut menu) = MenuBuilder::new().set_size(400, 300).add_quit_button().build() else {
        unreachable!("valid configuration");
    };

    assert!(matches!(menu.run(&mut backend), Ok(MenuOutcome::Quit)));

    assert_eq!(backend.surfaces(), [Coordinate::from_unsigned(400, 300)]);
    assert_eq!(backend.presents(), 3);
    let drawn_on = backend.menus_rendered().iter().map(|i| i.surface()).collect::<Vec<_>>();
    assert_eq!(drawn_on, [Some(SurfaceHandle::new(0)); 3]);
    assert_eq!(menu.surface(), Some(SurfaceHandle::new(0)));
}
