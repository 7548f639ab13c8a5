//! Application shell state machine.
//!
//! This module defines [`AppBuilder`] and [`App`]. The builder accumulates the
//! window size and, lazily, a menu. The app owns the board, the optional menu
//! overlay and the current game session.
//!
//! [`App::handle`] is the pure transition function: it consumes one
//! [`InputEvent`] and returns the [`AppAction`]s it caused. The frame loop in
//! [`App::run`] feeds it events and renders between ticks.
//!
//! # Overlay
//!
//! While the menu is enabled it owns all input. Keys go to the menu and board
//! clicks are dropped. The menu key only opens the overlay; it stays up until
//! a button closes it, starts a game or quits.

use std::time::Duration;

use crate::{
    AppAction, Board, BoardLayout, ButtonContext, Coordinate, Game, InputEvent, Key, Menu,
    MenuBuilder, MenuSelection, SurfaceHandle, ValidationError,
    constants::{BOARD_HEIGHT, BOARD_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH},
};

/// Lifecycle phase of an [`App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppPhase {
    /// Built, loop not started.
    Configuring,
    /// Frame loop active.
    Running,
    /// Loop exited. Terminal.
    Stopped,
}

/// Builder for [`App`].
///
/// Every menu-mutating call creates the menu on first use. Apps configured
/// without one never construct a menu.
#[derive(Debug)]
pub struct AppBuilder {
    windows_size: Coordinate,
    board_size: Coordinate,
    menu_key: Key,
    /// Presence is the single source of truth for `has_menu`.
    menu: Option<MenuBuilder>,
}

impl AppBuilder {
    /// Builder with the default window and board and no menu.
    pub fn new() -> Self {
        Self {
            windows_size: Coordinate::from_unsigned(WINDOW_WIDTH, WINDOW_HEIGHT),
            board_size: Coordinate::from_unsigned(BOARD_WIDTH, BOARD_HEIGHT),
            menu_key: Key::Esc,
            menu: None,
        }
    }

    /// Discard everything configured so far.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Set the window size.
    #[must_use]
    pub fn set_windows_size(mut self, width: u32, height: u32) -> Self {
        self.windows_size = Coordinate::from_unsigned(width, height);
        self
    }

    /// Set the board dimensions in cells.
    #[must_use]
    pub fn set_board_size(mut self, width: u32, height: u32) -> Self {
        self.board_size = Coordinate::from_unsigned(width, height);
        self
    }

    /// Set the key that opens the menu overlay.
    #[must_use]
    pub fn set_menu_key(mut self, key: Key) -> Self {
        self.menu_key = key;
        self
    }

    /// Set the menu title.
    #[must_use]
    pub fn set_menu_title(self, title: impl Into<String>) -> Self {
        self.with_menu(|menu| menu.set_title(title))
    }

    /// Use the dark menu theme.
    #[must_use]
    pub fn set_menu_dark_theme(self) -> Self {
        self.with_menu(MenuBuilder::set_dark_theme)
    }

    /// Use the light menu theme.
    #[must_use]
    pub fn set_menu_light_theme(self) -> Self {
        self.with_menu(MenuBuilder::set_light_theme)
    }

    /// Append a menu button running `on_click`.
    #[must_use]
    pub fn add_menu_button(
        self,
        name: impl Into<String>,
        on_click: impl FnMut(&mut ButtonContext) + 'static,
    ) -> Self {
        self.with_menu(|menu| menu.add_button(name, on_click))
    }

    /// Append the `Quit` button.
    #[must_use]
    pub fn add_menu_quit_button(self) -> Self {
        self.with_menu(MenuBuilder::add_quit_button)
    }

    /// Append a button that hides the overlay.
    #[must_use]
    pub fn add_menu_close_button(self, name: impl Into<String>) -> Self {
        self.with_menu(|menu| menu.add_close_button(name))
    }

    /// `true` once any menu-mutating call was made.
    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    /// Configured window size.
    pub fn windows_size(&self) -> Coordinate {
        self.windows_size
    }

    /// Validate the configuration and produce the app.
    ///
    /// No backend resource is touched; a failure here aborts startup cleanly.
    pub fn build(self) -> Result<App, ValidationError> {
        let (width, height) = self.windows_size.to_pair();
        if width == 0 || height == 0 {
            return Err(ValidationError::EmptyWindow { width, height });
        }
        let (columns, rows) = self.board_size.to_pair();
        if columns == 0 || rows == 0 {
            return Err(ValidationError::EmptyBoard { width: columns, height: rows });
        }
        // Every cell needs at least one window unit
        if columns > width || rows > height {
            return Err(ValidationError::BoardTooLarge { width: columns, height: rows });
        }
        let menu = self.menu.map(MenuBuilder::into_menu).transpose()?;

        Ok(App {
            windows_size: self.windows_size,
            layout: BoardLayout::new(self.windows_size, columns, rows),
            board: Board::new(columns, rows),
            menu,
            menu_key: self.menu_key,
            session: None,
            phase: AppPhase::Configuring,
            frames: 0,
            last_dt: Duration::ZERO,
        })
    }

    fn with_menu(mut self, configure: impl FnOnce(MenuBuilder) -> MenuBuilder) -> Self {
        let menu = self.menu.take().unwrap_or_else(|| {
            tracing::debug!("menu initialized");
            MenuBuilder::new()
        });
        self.menu = Some(configure(menu));
        self
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application shell.
///
/// Owns the window size, the board, the optional menu overlay and the
/// current game session. Pure: all I/O goes through the backend passed to
/// [`App::run`].
#[derive(Debug)]
pub struct App {
    /// Window size in window units. Fixed.
    windows_size: Coordinate,
    /// Board geometry derived from the window size.
    layout: BoardLayout,
    /// Stones placed so far.
    board: Board,
    /// Menu overlay. `None` if the app was configured without one.
    menu: Option<Menu>,
    /// Key opening the overlay.
    menu_key: Key,
    /// Current game session. `None` until a menu button starts one.
    session: Option<Game>,
    /// Lifecycle phase.
    pub(crate) phase: AppPhase,
    /// Frames presented so far.
    pub(crate) frames: u64,
    /// Duration of the last tick.
    pub(crate) last_dt: Duration,
}

impl App {
    /// Process an input event and return the resulting actions.
    pub fn handle(&mut self, event: InputEvent) -> Vec<AppAction> {
        match event {
            InputEvent::Quit => self.stop(),
            InputEvent::KeyDown(key) if key == self.menu_key && !self.overlay_enabled() => {
                self.open_overlay()
            },
            InputEvent::KeyDown(key) => self.handle_key(key),
            InputEvent::Click(point) => self.handle_click(point),
            InputEvent::Resize(width, height) => {
                tracing::debug!(width, height, "resize ignored, window size is fixed");
                vec![]
            },
        }
    }

    /// Replace the current session with `game` and clear the board.
    pub fn start_game(&mut self, game: Game) -> Vec<AppAction> {
        self.board.clear();
        self.session = Some(game);
        tracing::info!("game started");
        vec![AppAction::GameStarted]
    }

    /// Finalize the menu against the primary surface and enter `Running`.
    pub(crate) fn start(&mut self, surface: SurfaceHandle) {
        if let Some(menu) = &mut self.menu {
            menu.set_size(self.windows_size);
            menu.set_surface(surface);
            menu.build_instance();
        }
        self.phase = AppPhase::Running;
        tracing::info!(size = %self.windows_size, has_menu = self.has_menu(), "app running");
    }

    fn stop(&mut self) -> Vec<AppAction> {
        if self.phase != AppPhase::Stopped {
            tracing::info!("quit requested");
        }
        self.phase = AppPhase::Stopped;
        vec![AppAction::Quit]
    }

    fn open_overlay(&mut self) -> Vec<AppAction> {
        let Some(menu) = &mut self.menu else {
            return vec![];
        };
        menu.enable();
        tracing::debug!("overlay opened");
        vec![AppAction::OverlayOpened]
    }

    fn handle_key(&mut self, key: Key) -> Vec<AppAction> {
        let Some(menu) = self.menu.as_mut().filter(|m| m.is_enabled()) else {
            return vec![];
        };

        match menu.react(key) {
            Ok(Some(selection)) => self.apply_selection(selection),
            Ok(None) => vec![],
            Err(e) => {
                tracing::warn!("Menu key ignored: {e}");
                vec![]
            },
        }
    }

    fn handle_click(&mut self, point: Coordinate) -> Vec<AppAction> {
        if self.overlay_enabled() {
            tracing::trace!(%point, "click ignored while overlay is open");
            return vec![];
        }
        let Some(cell) = self.layout.cell_at(point) else {
            return vec![];
        };

        match self.board.place_stone(cell) {
            Ok(stone) => {
                if let Some(game) = &mut self.session {
                    game.record_turn();
                }
                vec![AppAction::StonePlaced { cell, stone }]
            },
            Err(e) => {
                tracing::debug!("Stone rejected: {e}");
                vec![]
            },
        }
    }

    fn apply_selection(&mut self, selection: MenuSelection) -> Vec<AppAction> {
        let MenuSelection { name, mut context } = selection;
        tracing::debug!(button = %name, "button pressed");

        let mut actions = vec![AppAction::ButtonPressed { name }];
        if let Some(game) = context.take_game() {
            actions.extend(self.start_game(game));
        }
        if context.quit_requested() {
            actions.extend(self.stop());
            return actions;
        }
        if context.menu_closed() {
            if let Some(menu) = &mut self.menu {
                menu.disable();
            }
            actions.push(AppAction::OverlayClosed);
        }
        actions
    }

    /// Window size.
    pub fn windows_size(&self) -> Coordinate {
        self.windows_size
    }

    /// `true` if the app was configured with a menu.
    pub fn has_menu(&self) -> bool {
        self.menu.is_some()
    }

    /// Menu overlay, if configured.
    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// `true` while the menu overlay owns input.
    pub fn overlay_enabled(&self) -> bool {
        self.menu.as_ref().is_some_and(Menu::is_enabled)
    }

    /// Board geometry.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Stones placed so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game session.
    pub fn session(&self) -> Option<&Game> {
        self.session.as_ref()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// `true` while the frame loop is active.
    pub fn is_running(&self) -> bool {
        self.phase == AppPhase::Running
    }

    /// Frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Duration of the last tick.
    pub fn last_dt(&self) -> Duration {
        self.last_dt
    }
}
