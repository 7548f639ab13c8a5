//! Validated two-dimensional coordinates.

use std::fmt;

use crate::ValidationError;

/// Pair of non-negative integers.
///
/// Used for window sizes, points in window units and board cells. Fields are
/// private so a value only exists once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    x: u32,
    y: u32,
}

impl Coordinate {
    /// Validate signed components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeCoordinate`] if `x` or `y` is
    /// negative. Nothing is constructed in that case.
    pub fn new(x: i32, y: i32) -> Result<Self, ValidationError> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok(Self { x: ux, y: uy }),
            _ => Err(ValidationError::NegativeCoordinate { x, y }),
        }
    }

    /// Build from components that are non-negative by type.
    pub const fn from_unsigned(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    pub const fn x(self) -> u32 {
        self.x
    }

    /// Vertical component.
    pub const fn y(self) -> u32 {
        self.y
    }

    /// Both components as a tuple.
    pub const fn to_pair(self) -> (u32, u32) {
        (self.x, self.y)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = ValidationError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self::from_unsigned(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
