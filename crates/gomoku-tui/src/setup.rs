//! The Gomoku menu and the sessions its buttons start.

use gomoku_app::{
    App, AppBuilder, ButtonContext, GameBuilder, PlayerAlreadySetError, Theme, ValidationError,
    constants::WINDOW_TITLE,
};

/// Labels of the main menu, top to bottom.
pub const MENU_BUTTONS: [&str; 4] = ["1 vs 1", "1 vs AI", "AI vs AI", "Quit"];

type AssignPlayers = fn(&mut GameBuilder) -> Result<&mut GameBuilder, PlayerAlreadySetError>;

fn start_session(ctx: &mut ButtonContext, assign: AssignPlayers) {
    let mut builder = GameBuilder::new();
    match assign(&mut builder) {
        Ok(builder) => ctx.start_game(builder.build()),
        Err(e) => tracing::warn!("Session not started: {e}"),
    }
}

/// Configure the Gomoku app for a `width` x `height` window.
///
/// # Errors
///
/// [`ValidationError`] if the window size has a zero axis.
pub fn build_app(width: u32, height: u32, theme: Theme) -> Result<App, ValidationError> {
    let [human, mixed, ai, _] = MENU_BUTTONS;

    let builder = AppBuilder::new().set_windows_size(width, height).set_menu_title(WINDOW_TITLE);
    let builder = match theme {
        Theme::Dark => builder.set_menu_dark_theme(),
        Theme::Light => builder.set_menu_light_theme(),
    };

    builder
        .add_menu_button(human, |ctx| start_session(ctx, GameBuilder::set_players_only_human))
        .add_menu_button(mixed, |ctx| start_session(ctx, GameBuilder::set_players_mixed))
        .add_menu_button(ai, |ctx| start_session(ctx, GameBuilder::set_players_only_ai))
        .add_menu_quit_button()
        .build()
}

#[cfg(test)]
mod tests {
    use gomoku_app::{Menu, PlayerKind, Seat};

    use super::*;

    #[test]
    fn menu_has_gomoku_buttons() {
        let Ok(app) = build_app(800, 600, Theme::Dark) else {
            unreachable!("valid configuration");
        };

        assert!(app.has_menu());
        assert_eq!(app.menu().map(Menu::button_names), Some(MENU_BUTTONS.to_vec()));
        assert_eq!(app.menu().map(Menu::title), Some("Gomoku"));
        assert_eq!(app.menu().map(Menu::theme), Some(Theme::Dark));
    }

    #[test]
    fn sessions_seat_expected_players() {
        let mut ctx = ButtonContext::new();
        start_session(&mut ctx, GameBuilder::set_players_only_ai);

        let game = ctx.take_game();
        let kinds = game.as_ref().and_then(|g| {
            Some((g.player(Seat::First)?.kind(), g.player(Seat::Second)?.kind()))
        });
        assert_eq!(kinds, Some((PlayerKind::Ai, PlayerKind::Ai)));
        assert!(ctx.menu_closed());
    }

    #[test]
    fn rejects_empty_window() {
        assert_eq!(
            build_app(0, 0, Theme::Light).err(),
            Some(ValidationError::EmptyWindow { width: 0, height: 0 })
        );
    }
}
