//! Menu buttons and what they do when pressed.

use std::fmt;

use crate::{Game, constants::QUIT_BUTTON_LABEL};

/// Callback run when an [`ButtonAction::Invoke`] button is pressed.
pub type ButtonHandler = Box<dyn FnMut(&mut ButtonContext)>;

/// What a button does.
///
/// Quitting and closing are explicit variants so the frame loop can act on
/// them without running arbitrary code.
pub enum ButtonAction {
    /// Run a handler.
    Invoke(ButtonHandler),
    /// Stop the application.
    RequestQuit,
    /// Hide the menu overlay.
    Close,
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke(_) => f.write_str("Invoke(..)"),
            Self::RequestQuit => f.write_str("RequestQuit"),
            Self::Close => f.write_str("Close"),
        }
    }
}

/// Requests collected while a button is pressed.
///
/// Handlers receive it mutably; the app applies the requests afterwards.
#[derive(Debug, Default)]
pub struct ButtonContext {
    close_menu: bool,
    quit: bool,
    game: Option<Game>,
}

impl ButtonContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the overlay once the handler returns.
    pub fn close_menu(&mut self) {
        self.close_menu = true;
    }

    /// Stop the application once the handler returns.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Replace the current session with `game`. Implies closing the menu.
    pub fn start_game(&mut self, game: Game) {
        self.game = Some(game);
        self.close_menu = true;
    }

    /// `true` if the overlay should close.
    pub fn menu_closed(&self) -> bool {
        self.close_menu
    }

    /// `true` if the application should stop.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Game to start, if any.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Take the game to start, if any.
    pub fn take_game(&mut self) -> Option<Game> {
        self.game.take()
    }
}

/// A named menu entry.
#[derive(Debug)]
pub struct Button {
    name: String,
    action: ButtonAction,
}

impl Button {
    /// Button with an explicit action.
    pub fn new(name: impl Into<String>, action: ButtonAction) -> Self {
        Self { name: name.into(), action }
    }

    /// Button running `handler`.
    pub fn invoke(
        name: impl Into<String>,
        handler: impl FnMut(&mut ButtonContext) + 'static,
    ) -> Self {
        Self::new(name, ButtonAction::Invoke(Box::new(handler)))
    }

    /// The `Quit` button.
    pub fn quit() -> Self {
        Self::new(QUIT_BUTTON_LABEL, ButtonAction::RequestQuit)
    }

    /// Button hiding the overlay.
    pub fn close(name: impl Into<String>) -> Self {
        Self::new(name, ButtonAction::Close)
    }

    /// Label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Action run on press.
    pub fn action(&self) -> &ButtonAction {
        &self.action
    }

    /// Run the action and collect its requests.
    pub fn press(&mut self) -> ButtonContext {
        let mut ctx = ButtonContext::new();
        match &mut self.action {
            ButtonAction::Invoke(handler) => handler(&mut ctx),
            ButtonAction::RequestQuit => ctx.request_quit(),
            ButtonAction::Close => ctx.close_menu(),
        }
        ctx
    }
}
