//! Simulation backend implementing the backend traits.
//!
//! `SimBackend` provides the same interface as the terminal backend but for
//! deterministic testing. Each call to `poll_events` pops one scripted batch;
//! once the script is exhausted the backend emits [`InputEvent::Quit`] so a
//! run always terminates.

use std::{collections::VecDeque, time::Duration};

use gomoku_app::{
    Color, Coordinate, InputEvent, MenuBackend, MenuInstance, Rect, RenderBackend, SurfaceHandle,
};

/// Error type for the simulation backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimBackendError {
    /// Draw call against a surface this backend never created.
    #[error("unknown surface {0:?}")]
    UnknownSurface(SurfaceHandle),

    /// Failure injected by the test.
    #[error("injected failure in {0}")]
    Injected(&'static str),
}

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    /// `fill_rect`.
    Fill {
        /// Fill colour.
        color: Color,
        /// Filled area.
        rect: Rect,
    },
    /// `draw_rect`.
    Stroke {
        /// Line colour.
        color: Color,
        /// Outlined area.
        rect: Rect,
        /// Line width.
        width: u32,
    },
    /// `render_menu`, with the instance as it was drawn.
    Menu(MenuInstance),
    /// `present`.
    Present,
}

/// Simulation backend for deterministic testing.
#[derive(Debug, Default)]
pub struct SimBackend {
    script: VecDeque<Vec<InputEvent>>,
    surfaces: Vec<Coordinate>,
    calls: Vec<DrawCall>,
    clock: Duration,
    polls: usize,
    teardowns: usize,
    fail_present: bool,
    fail_poll: bool,
}

impl SimBackend {
    /// Backend with an empty script. Its first poll returns a quit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend replaying `ticks`, one batch per poll.
    pub fn scripted(ticks: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self { script: ticks.into_iter().collect(), ..Self::default() }
    }

    /// Queue one more batch of events.
    pub fn push_tick(&mut self, events: Vec<InputEvent>) {
        self.script.push_back(events);
    }

    /// Make the next `present` fail.
    pub fn fail_next_present(&mut self) {
        self.fail_present = true;
    }

    /// Make the next `poll_events` fail.
    pub fn fail_next_poll(&mut self) {
        self.fail_poll = true;
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded calls grouped by frame. A frame ends with its present.
    pub fn frames(&self) -> Vec<&[DrawCall]> {
        self.calls
            .split_inclusive(|c| *c == DrawCall::Present)
            .filter(|frame| frame.last() == Some(&DrawCall::Present))
            .collect()
    }

    /// Calls of the last presented frame.
    pub fn last_frame(&self) -> Option<&[DrawCall]> {
        self.frames().pop()
    }

    /// Number of presents.
    pub fn presents(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }

    /// Menu instances drawn, in order.
    pub fn menus_rendered(&self) -> Vec<&MenuInstance> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Menu(instance) => Some(instance),
                _ => None,
            })
            .collect()
    }

    /// Sizes of the surfaces created so far.
    pub fn surfaces(&self) -> &[Coordinate] {
        &self.surfaces
    }

    /// Virtual time elapsed across ticks.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Number of `poll_events` calls.
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Number of `teardown` calls.
    pub fn teardowns(&self) -> usize {
        self.teardowns
    }

    /// `true` once torn down.
    pub fn is_torn_down(&self) -> bool {
        self.teardowns > 0
    }

    fn check_surface(&self, surface: SurfaceHandle) -> Result<(), SimBackendError> {
        if (surface.id() as usize) < self.surfaces.len() {
            Ok(())
        } else {
            Err(SimBackendError::UnknownSurface(surface))
        }
    }
}

impl RenderBackend for SimBackend {
    type Error = SimBackendError;

    fn create_surface(&mut self, size: Coordinate) -> Result<SurfaceHandle, Self::Error> {
        let id = self.surfaces.len() as u32;
        self.surfaces.push(size);
        tracing::trace!(id, %size, "surface created");
        Ok(SurfaceHandle::new(id))
    }

    fn fill_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
    ) -> Result<(), Self::Error> {
        self.check_surface(surface)?;
        self.calls.push(DrawCall::Fill { color, rect });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        surface: SurfaceHandle,
        color: Color,
        rect: Rect,
        stroke_width: u32,
    ) -> Result<(), Self::Error> {
        self.check_surface(surface)?;
        self.calls.push(DrawCall::Stroke { color, rect, width: stroke_width });
        Ok(())
    }

    fn present(&mut self, surface: SurfaceHandle) -> Result<(), Self::Error> {
        self.check_surface(surface)?;
        if std::mem::take(&mut self.fail_present) {
            return Err(SimBackendError::Injected("present"));
        }
        self.calls.push(DrawCall::Present);
        Ok(())
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        self.polls += 1;
        if std::mem::take(&mut self.fail_poll) {
            return Err(SimBackendError::Injected("poll_events"));
        }
        Ok(self.script.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
    }

    fn tick(&mut self, target_fps: u32) -> Duration {
        let dt = Duration::from_secs(1) / target_fps.max(1);
        self.clock += dt;
        dt
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
    }
}

impl MenuBackend for SimBackend {
    fn render_menu(&mut self, instance: &MenuInstance) -> Result<(), Self::Error> {
        if let Some(surface) = instance.surface() {
            self.check_surface(surface)?;
        }
        self.calls.push(DrawCall::Menu(instance.clone()));
        Ok(())
    }
}
