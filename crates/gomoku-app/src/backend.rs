//! Backend traits for abstracting rendering and input.
//!
//! The [`RenderBackend`] and [`MenuBackend`] traits decouple the frame loop
//! from a specific window system. Each frontend implements them while
//! [`App::run`](crate::App::run) handles all orchestration, so the same loop
//! runs in the terminal and in simulation.

use std::time::Duration;

use crate::{Coordinate, InputEvent, MenuInstance, Rect};

/// Opaque handle to a backend-owned drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u32);

impl SurfaceHandle {
    /// Wrap a backend-assigned surface id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Backend-assigned surface id.
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Board background.
    pub const BROWN: Self = Self::rgb(127, 63, 0);
    /// White stones.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Grid lines and black stones.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Window surface, primitive drawing, input and clock.
///
/// # Associated Types
///
/// - [`Error`](RenderBackend::Error): platform-specific error type
pub trait RenderBackend {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Acquire a surface covering `size` window units.
    fn create_surface(&mut self, size: Coordinate) -> Result<SurfaceHandle, Self::Error>;

    /// Fill `rect` with `color`.
    fn fill_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
    ) -> Result<(), Self::Error>;

    /// Outline `rect` with a `stroke_width` wide line.
    fn draw_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
        stroke_width: u32,
    ) -> Result<(), Self::Error>;

    /// Show everything drawn on `surface` since the last present.
    fn present(&mut self, surface: SurfaceHandle) -> Result<(), Self::Error>;

    /// Drain every input event pending for this tick. Never blocks.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, Self::Error>;

    /// Wait for the next tick at `target_fps` and return the time elapsed
    /// since the previous one.
    ///
    /// May return early when input becomes available.
    fn tick(&mut self, target_fps: u32) -> Duration;

    /// Release every backend resource.
    ///
    /// Called exactly once by the frame loop on every exit path.
    /// Implementations must tolerate a second call.
    fn teardown(&mut self);
}

/// Menu widget rendering on top of a [`RenderBackend`].
///
/// The core materializes the [`MenuInstance`] (title, size, theme, entries,
/// selection); the backend only decides how it looks.
pub trait MenuBackend: RenderBackend {
    /// Draw `instance` onto its surface.
    fn render_menu(&mut self, instance: &MenuInstance) -> Result<(), Self::Error>;
}
