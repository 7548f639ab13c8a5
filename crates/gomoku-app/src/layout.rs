//! Rectangle geometry in window units.
//!
//! The core never touches pixels. It computes where things go and hands the
//! rectangles to the backend.

use crate::Coordinate;

/// Axis-aligned rectangle in window units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin covering `size`.
    pub const fn from_size(size: Coordinate) -> Self {
        Self::new(0, 0, size.x(), size.y())
    }

    /// Rectangle of `size` centred in `outer`, clamped to it.
    pub fn centered(outer: Rect, size: Coordinate) -> Self {
        let width = size.x().min(outer.width);
        let height = size.y().min(outer.height);
        Self::new(
            outer.x + (outer.width - width) / 2,
            outer.y + (outer.height - height) / 2,
            width,
            height,
        )
    }

    /// One past the right edge.
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom edge.
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// `true` if the rectangle has no area.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `true` if `point` lies inside.
    pub fn contains(&self, point: Coordinate) -> bool {
        (self.x..self.right()).contains(&point.x()) && (self.y..self.bottom()).contains(&point.y())
    }

    /// `true` if both rectangles share some area.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `margin` on every side. Collapses to the centre if too small.
    #[must_use]
    pub fn inset(&self, margin: u32) -> Self {
        let dx = margin.min(self.width / 2);
        let dy = margin.min(self.height / 2);
        Self::new(self.x + dx, self.y + dy, self.width - 2 * dx, self.height - 2 * dy)
    }
}

/// Board geometry for a given window.
///
/// Cells are square: the side is the smaller of the two axis-derived sizes.
/// The slack left on each axis is split evenly so the board is centred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin: Coordinate,
    cell_size: u32,
    columns: u32,
    rows: u32,
}

impl BoardLayout {
    /// Compute the layout of a `columns` x `rows` board inside `window`.
    pub fn new(window: Coordinate, columns: u32, rows: u32) -> Self {
        let cell_size = match (window.x().checked_div(columns), window.y().checked_div(rows)) {
            (Some(w), Some(h)) => w.min(h),
            _ => 0,
        };
        let slack_x = window.x() - cell_size * columns;
        let slack_y = window.y() - cell_size * rows;

        Self {
            origin: Coordinate::from_unsigned(slack_x / 2, slack_y / 2),
            cell_size,
            columns,
            rows,
        }
    }

    /// Side of one cell. Zero if the window is smaller than the board.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Top-left corner of the board.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Area covered by the board.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x(),
            self.origin.y(),
            self.cell_size * self.columns,
            self.cell_size * self.rows,
        )
    }

    /// Rectangle of `cell`. `None` outside the board.
    pub fn cell_rect(&self, cell: Coordinate) -> Option<Rect> {
        if cell.x() >= self.columns || cell.y() >= self.rows {
            return None;
        }
        Some(Rect::new(
            self.origin.x() + cell.x() * self.cell_size,
            self.origin.y() + cell.y() * self.cell_size,
            self.cell_size,
            self.cell_size,
        ))
    }

    /// Cell under `point`. `None` outside the board or for a degenerate layout.
    pub fn cell_at(&self, point: Coordinate) -> Option<Coordinate> {
        if self.cell_size == 0 || !self.bounds().contains(point) {
            return None;
        }
        Some(Coordinate::from_unsigned(
            (point.x() - self.origin.x()) / self.cell_size,
            (point.y() - self.origin.y()) / self.cell_size,
        ))
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| Coordinate::from_unsigned(x, y)))
    }
}
