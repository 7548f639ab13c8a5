//! Off-screen drawing surface.
//!
//! A [`Canvas`] is a ratatui [`Buffer`] plus the window size it represents.
//! Rectangles arrive in window units and are scaled onto the character grid;
//! any non-empty rectangle covers at least one cell so small stones stay
//! visible on small terminals.

use gomoku_app::{Coordinate, MenuInstance, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Clear, List, ListState, StatefulWidget, Widget},
};

/// Symbol drawn for outlines too small for a border.
const MARKER: &str = "+";

/// Convert a core colour to a terminal colour.
pub fn to_color(color: gomoku_app::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn scale(value: u32, cells: u16, units: u32) -> u16 {
    (u64::from(value) * u64::from(cells) / u64::from(units.max(1))) as u16
}

/// Window point at the centre of cell (`column`, `row`) of `area`.
pub fn cell_to_window(window: Coordinate, area: Rect, column: u16, row: u16) -> Coordinate {
    let centre = |offset: u16, cells: u16, units: u32| {
        let cells = u64::from(cells.max(1));
        ((u64::from(offset) * 2 + 1) * u64::from(units) / (cells * 2)) as u32
    };

    Coordinate::from_unsigned(
        centre(column.saturating_sub(area.x), area.width, window.x()),
        centre(row.saturating_sub(area.y), area.height, window.y()),
    )
}

/// Drawing surface backed by a ratatui buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    window: Coordinate,
    buffer: Buffer,
}

impl Canvas {
    /// Canvas showing `window` units on `area` cells.
    pub fn new(window: Coordinate, area: Rect) -> Self {
        Self { window, buffer: Buffer::empty(area) }
    }

    /// Cells covered by the canvas.
    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    /// Drawn content.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Follow a terminal resize. Content is discarded.
    pub fn resize(&mut self, area: Rect) {
        self.buffer = Buffer::empty(area);
    }

    /// Discard everything drawn.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Cells covered by `rect`, clamped to the canvas.
    pub fn to_cells(&self, rect: gomoku_app::Rect) -> Rect {
        let area = self.area();
        if rect.is_empty() {
            return Rect::new(area.x, area.y, 0, 0);
        }
        let (width, height) = self.window.to_pair();

        let left = scale(rect.x, area.width, width);
        let top = scale(rect.y, area.height, height);
        let right = scale(rect.right(), area.width, width).max(left + 1);
        let bottom = scale(rect.bottom(), area.height, height).max(top + 1);

        Rect::new(area.x + left, area.y + top, right - left, bottom - top).intersection(area)
    }

    /// Window point at the centre of cell (`column`, `row`).
    pub fn to_window(&self, column: u16, row: u16) -> Coordinate {
        cell_to_window(self.window, self.area(), column, row)
    }

    /// Paint the background of every cell under `rect`.
    pub fn fill(&mut self, color: gomoku_app::Color, rect: gomoku_app::Rect) {
        let area = self.to_cells(rect);
        self.buffer.set_style(area, Style::default().bg(to_color(color)));
    }

    /// Outline `rect`. Outlines smaller than two cells become a marker.
    pub fn stroke(&mut self, color: gomoku_app::Color, rect: gomoku_app::Rect) {
        let area = self.to_cells(rect);
        if area.is_empty() {
            return;
        }

        let style = Style::default().fg(to_color(color));
        if area.width >= 2 && area.height >= 2 {
            Block::bordered().border_style(style).render(area, &mut self.buffer);
        } else if let Some(cell) = self.buffer.cell_mut(Position::new(area.x, area.y)) {
            cell.set_symbol(MARKER).set_style(style);
        }
    }

    /// Draw `instance` as a bordered list, centred on the canvas.
    pub fn draw_menu(&mut self, instance: &MenuInstance) {
        let window = gomoku_app::Rect::from_size(self.window);
        let area = self.to_cells(gomoku_app::Rect::centered(window, instance.size()));

        let (fg, bg) = match instance.theme() {
            Theme::Dark => (Color::White, Color::Rgb(30, 30, 30)),
            Theme::Light => (Color::Black, Color::Rgb(230, 230, 230)),
        };
        let panel = Style::default().fg(fg).bg(bg);

        let block = Block::bordered().title(instance.title()).style(panel);
        let inner = block.inner(area);
        Clear.render(area, &mut self.buffer);
        block.render(area, &mut self.buffer);

        let items = instance.entries().iter().map(String::as_str);
        let list = List::new(items)
            .style(panel)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(instance.selected()));
        StatefulWidget::render(list, inner, &mut self.buffer, &mut state);
    }

    /// Copy the canvas onto `target` where the two overlap.
    pub fn blit(&self, target: &mut Buffer) {
        let overlap = target.area.intersection(self.buffer.area);
        for position in overlap.positions() {
            if let (Some(dst), Some(src)) = (target.cell_mut(position), self.buffer.cell(position))
            {
                *dst = src.clone();
            }
        }
    }
}
