//! Terminal backend for the shell.
//!
//! Implements [`RenderBackend`] and [`MenuBackend`] using crossterm for input
//! and ratatui for output. Each surface is an off-screen [`Canvas`]; `present`
//! copies it to the terminal in one draw.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gomoku_app::{
    Color, Coordinate, InputEvent, Key, MenuBackend, MenuInstance, Rect, RenderBackend,
    SurfaceHandle,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{Canvas, canvas::cell_to_window};

/// Terminal backend errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Draw call against a surface this backend never created.
    #[error("unknown surface {0:?}")]
    UnknownSurface(SurfaceHandle),
}

/// Run `init`, calling `restore` if any step of it fails.
fn restore_on_error<T>(
    init: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    init().inspect_err(|_| restore())
}

/// Terminal backend implementing the backend traits.
///
/// Owns the terminal from construction until [`RenderBackend::teardown`] or
/// drop, whichever comes first.
pub struct TerminalBackend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    window: Coordinate,
    area: ratatui::layout::Rect,
    surfaces: Vec<Canvas>,
    last_tick: Instant,
    active: bool,
}

impl TerminalBackend {
    /// Take over the terminal for a window of `window` units.
    ///
    /// The terminal is restored if setup fails halfway.
    pub fn new(window: Coordinate) -> Result<Self, TerminalError> {
        let (terminal, size) = restore_on_error(
            || {
                let terminal = Self::setup()?;
                let size = terminal.size()?;
                Ok((terminal, size))
            },
            Self::restore,
        )?;

        Ok(Self {
            terminal,
            window,
            area: ratatui::layout::Rect::new(0, 0, size.width, size.height),
            surfaces: Vec::new(),
            last_tick: Instant::now(),
            active: true,
        })
    }

    fn setup() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout()))
    }

    fn restore() {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {e}");
        }
        if let Err(e) = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen) {
            tracing::warn!("Failed to leave alternate screen: {e}");
        }
    }

    fn canvas(&mut self, surface: SurfaceHandle) -> Result<&mut Canvas, TerminalError> {
        self.surfaces
            .get_mut(surface.id() as usize)
            .ok_or(TerminalError::UnknownSurface(surface))
    }

    /// Convert a crossterm key press.
    fn convert_key(key: KeyEvent) -> Option<InputEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let key = match key.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => return None,
        };
        Some(InputEvent::KeyDown(key))
    }

    /// Convert a crossterm event for a window shown on `area` cells.
    fn convert_event(
        event: &Event,
        window: Coordinate,
        area: ratatui::layout::Rect,
    ) -> Option<InputEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::convert_key(*key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(InputEvent::Click(cell_to_window(window, area, mouse.column, mouse.row)))
            },
            Event::Resize(columns, rows) => {
                Some(InputEvent::Resize(u32::from(*columns), u32::from(*rows)))
            },
            _ => None,
        }
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        self.area = ratatui::layout::Rect::new(0, 0, columns, rows);
        for canvas in &mut self.surfaces {
            canvas.resize(self.area);
        }
        tracing::debug!(columns, rows, "terminal resized");
    }
}

impl RenderBackend for TerminalBackend {
    type Error = TerminalError;

    fn create_surface(&mut self, size: Coordinate) -> Result<SurfaceHandle, Self::Error> {
        let handle = SurfaceHandle::new(self.surfaces.len() as u32);
        self.surfaces.push(Canvas::new(size, self.area));
        tracing::debug!(id = handle.id(), %size, "surface created");
        Ok(handle)
    }

    fn fill_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
    ) -> Result<(), Self::Error> {
        self.canvas(surface)?.fill(color, rect);
        Ok(())
    }

    fn draw_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
        _stroke_width: u32,
    ) -> Result<(), Self::Error> {
        self.canvas(surface)?.stroke(color, rect);
        Ok(())
    }

    fn present(&mut self, surface: SurfaceHandle) -> Result<(), Self::Error> {
        let canvas = self
            .surfaces
            .get_mut(surface.id() as usize)
            .ok_or(TerminalError::UnknownSurface(surface))?;

        self.terminal.draw(|frame| canvas.blit(frame.buffer_mut()))?;
        canvas.reset();
        Ok(())
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Event::Resize(columns, rows) = event {
                self.resize(columns, rows);
            }
            if let Some(input) = Self::convert_event(&event, self.window, self.area) {
                events.push(input);
            }
        }
        Ok(events)
    }

    fn tick(&mut self, target_fps: u32) -> Duration {
        let frame = Duration::from_secs(1) / target_fps.max(1);
        let remaining = (self.last_tick + frame).saturating_duration_since(Instant::now());

        // Wake early on input; the next poll picks it up
        if !remaining.is_zero()
            && let Err(e) = event::poll(remaining)
        {
            tracing::warn!("Failed to wait for input: {e}");
        }

        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        dt
    }

    fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        Self::restore();
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to show cursor: {e}");
        }
    }
}

impl MenuBackend for TerminalBackend {
    fn render_menu(&mut self, instance: &MenuInstance) -> Result<(), Self::Error> {
        let surface = instance.surface().unwrap_or(SurfaceHandle::new(0));
        self.canvas(surface)?.draw_menu(instance);
        Ok(())
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        self.teardown();
    }
}
