//! Frame loop driving an [`App`] through a backend.
//!
//! Each tick the loop:
//! 1. Drains input from the backend into [`App::handle`]
//! 2. Draws the board, then the menu overlay on top
//! 3. Presents the primary surface
//! 4. Waits for the next tick
//!
//! A quit does not cut the tick short: the rest of its events are still
//! handled and one final frame is presented. The loop then exits without
//! waiting or polling again.

use crate::{
    App, AppAction, AppPhase, CellState, Color, MenuBackend, Rect, RunError, SurfaceHandle,
    constants::{GRID_STROKE, TARGET_FPS},
};

impl App {
    /// Run the frame loop until a quit is requested.
    ///
    /// Backend teardown happens on every exit path, including errors. The app
    /// ends in [`AppPhase::Stopped`] and cannot run again.
    ///
    /// # Errors
    ///
    /// - [`RunError::InvalidPhase`] if the app already ran
    /// - [`RunError::Backend`] if the backend fails mid-loop
    pub fn run<B: MenuBackend>(&mut self, backend: &mut B) -> Result<(), RunError<B::Error>> {
        if self.phase != AppPhase::Configuring {
            return Err(RunError::InvalidPhase(self.phase));
        }

        let result = self.run_loop(backend);
        backend.teardown();
        self.phase = AppPhase::Stopped;

        match &result {
            Ok(()) => tracing::info!(frames = self.frames, "app stopped"),
            Err(e) => tracing::error!(frames = self.frames, "App stopped on error: {e}"),
        }
        result
    }

    fn run_loop<B: MenuBackend>(&mut self, backend: &mut B) -> Result<(), RunError<B::Error>> {
        let surface = backend.create_surface(self.windows_size()).map_err(RunError::Backend)?;
        self.start(surface);

        loop {
            let mut quit = false;
            for event in backend.poll_events().map_err(RunError::Backend)? {
                let actions = self.handle(event);
                if !actions.is_empty() {
                    tracing::debug!(?actions, "event handled");
                }
                quit |= actions.contains(&AppAction::Quit);
            }

            self.draw_frame(backend, surface)?;
            backend.present(surface).map_err(RunError::Backend)?;
            self.frames += 1;
            if quit {
                return Ok(());
            }
            self.last_dt = backend.tick(TARGET_FPS);
        }
    }

    fn draw_frame<B: MenuBackend>(
        &self,
        backend: &mut B,
        surface: SurfaceHandle,
    ) -> Result<(), RunError<B::Error>> {
        let window = Rect::from_size(self.windows_size());
        backend.fill_rect(surface, Color::BROWN, window).map_err(RunError::Backend)?;

        let overlay = self.overlay_region();
        let layout = self.layout();
        let margin = layout.cell_size() / 4;

        for cell in layout.cells() {
            let Some(rect) = layout.cell_rect(cell) else {
                continue;
            };
            if overlay.is_some_and(|o| o.intersects(&rect)) {
                continue;
            }

            backend
                .draw_rect(surface, Color::BLACK, rect, GRID_STROKE)
                .map_err(RunError::Backend)?;

            let color = match self.board().grid().get(cell) {
                Some(CellState::Black) => Color::BLACK,
                Some(CellState::White) => Color::WHITE,
                Some(CellState::Empty) | None => continue,
            };
            backend.fill_rect(surface, color, rect.inset(margin)).map_err(RunError::Backend)?;
        }

        match self.menu() {
            Some(menu) => menu.render(backend),
            None => Ok(()),
        }
    }

    /// Area hidden behind the overlay, if it is shown.
    fn overlay_region(&self) -> Option<Rect> {
        let menu = self.menu().filter(|m| m.is_enabled())?;
        let size = menu.instance()?.size();
        Some(Rect::centered(Rect::from_size(self.windows_size()), size))
    }
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, time::Duration};

    use super::*;
    use crate::{AppBuilder, Coordinate, InputEvent, Key, MenuInstance, RenderBackend};

    /// Minimal backend counting calls. Replays `script`, then quits.
    #[derive(Default)]
    struct Counting {
        script: Vec<Vec<InputEvent>>,
        tick: usize,
        fills: usize,
        strokes: usize,
        menus: usize,
        presents: usize,
        teardowns: usize,
    }

    impl RenderBackend for Counting {
        type Error = Infallible;

        fn create_surface(&mut self, _size: Coordinate) -> Result<SurfaceHandle, Infallible> {
            Ok(SurfaceHandle::new(7))
        }

        fn fill_rect(&mut self, _: SurfaceHandle, _: Color, _: Rect) -> Result<(), Infallible> {
            self.fills += 1;
            Ok(())
        }

        fn draw_rect(
            &mut self,
            _: SurfaceHandle,
            _: Color,
            _: Rect,
            _: u32,
        ) -> Result<(), Infallible> {
            self.strokes += 1;
            Ok(())
        }

        fn present(&mut self, _: SurfaceHandle) -> Result<(), Infallible> {
            self.presents += 1;
            Ok(())
        }

        fn poll_events(&mut self) -> Result<Vec<InputEvent>, Infallible> {
            let events =
                self.script.get(self.tick).cloned().unwrap_or_else(|| vec![InputEvent::Quit]);
            self.tick += 1;
            Ok(events)
        }

        fn tick(&mut self, _: u32) -> Duration {
            Duration::from_millis(16)
        }

        fn teardown(&mut self) {
            self.teardowns += 1;
        }
    }

    impl MenuBackend for Counting {
        fn render_menu(&mut self, _: &MenuInstance) -> Result<(), Infallible> {
            self.menus += 1;
            Ok(())
        }
    }

    fn app(with_menu: bool) -> App {
        let mut builder = AppBuilder::new().set_windows_size(800, 600);
        if with_menu {
            builder = builder
                .set_menu_title("Gomoku")
                .add_menu_close_button("Resume")
                .add_menu_quit_button();
        }
        let Ok(app) = builder.build() else {
            unreachable!("valid configuration");
        };
        app
    }

    #[test]
    fn quit_on_first_tick_presents_one_frame() {
        let mut backend = Counting::default();
        let mut app = app(true);

        assert!(app.run(&mut backend).is_ok());
        assert_eq!(backend.tick, 1);
        assert_eq!(backend.presents, 1);
        assert_eq!(backend.menus, 1);
        assert_eq!(backend.teardowns, 1);
        assert_eq!(app.frames_presented(), 1);
        assert_eq!(app.last_dt(), Duration::ZERO);
        assert_eq!(app.phase(), AppPhase::Stopped);
    }

    #[test]
    fn frames_counted_per_present() {
        let mut backend = Counting { script: vec![vec![], vec![], vec![]], ..Counting::default() };
        let mut app = app(false);

        assert!(app.run(&mut backend).is_ok());
        // Three scripted ticks plus the quitting one
        assert_eq!(backend.presents, 4);
        assert_eq!(app.frames_presented(), 4);
        assert_eq!(app.last_dt(), Duration::from_millis(16));
        // One background fill per frame, one stroke per cell
        assert_eq!(backend.fills, 4);
        assert_eq!(backend.strokes, 4 * 361);
        assert_eq!(backend.menus, 0);
    }

    #[test]
    fn overlay_hides_board_cells() {
        let mut backend = Counting { script: vec![vec![]], ..Counting::default() };
        let mut app = app(true);

        assert!(app.run(&mut backend).is_ok());
        // Menu covers the whole window by default
        assert_eq!(backend.strokes, 0);
        assert_eq!(backend.menus, 2);
    }

    #[test]
    fn overlay_closed_draws_grid_and_stones() {
        let mut backend = Counting {
            script: vec![vec![
                InputEvent::KeyDown(Key::Enter),
                InputEvent::Click(Coordinate::from_unsigned(400, 300)),
                InputEvent::Quit,
            ]],
            ..Counting::default()
        };
        let mut app = app(true);

        assert!(app.run(&mut backend).is_ok());
        assert_eq!(app.board().stone_count(), 1);
        assert_eq!(backend.presents, 1);
        assert_eq!(backend.strokes, 361);
        assert_eq!(backend.fills, 2);
        assert_eq!(backend.menus, 0);
    }

    #[test]
    fn events_after_quit_finish_the_tick() {
        let mut backend = Counting {
            script: vec![vec![InputEvent::Quit, InputEvent::KeyDown(Key::Enter)]],
            ..Counting::default()
        };
        let mut app = app(true);

        assert!(app.run(&mut backend).is_ok());

        // Resume was still pressed and the final frame shows the board
        assert!(!app.overlay_enabled());
        assert_eq!(backend.tick, 1);
        assert_eq!(backend.presents, 1);
        assert_eq!(backend.menus, 0);
        assert_eq!(backend.strokes, 361);
    }

    #[test]
    fn second_run_rejected() {
        let mut backend = Counting::default();
        let mut app = app(false);

        assert!(app.run(&mut backend).is_ok());
        assert!(matches!(app.run(&mut backend), Err(RunError::InvalidPhase(AppPhase::Stopped))));
        assert_eq!(backend.teardowns, 1);
    }
}
