//! Compile-time defaults.
//!
//! Sizes are in window units. Frontends decide how a window unit maps onto
//! their own output (pixels, terminal cells).

use std::time::Duration;

/// Board columns.
pub const BOARD_WIDTH: u32 = 19;

/// Board rows.
pub const BOARD_HEIGHT: u32 = 19;

/// Default window width.
pub const WINDOW_WIDTH: u32 = 1080;

/// Default window height.
pub const WINDOW_HEIGHT: u32 = 720;

/// Window and menu title.
pub const WINDOW_TITLE: &str = "Gomoku";

/// Frame rate the loop asks the backend to hold.
pub const TARGET_FPS: u32 = 60;

/// Time allotted to a single turn unless overridden.
pub const DEFAULT_TURN_TIME: Duration = Duration::from_secs(60);

/// Time allotted to each player for the whole game unless overridden.
pub const DEFAULT_GAME_TIME: Duration = Duration::from_secs(10 * 60);

/// Stroke width of grid lines.
pub const GRID_STROKE: u32 = 1;

/// Label of the button appended by `add_quit_button`.
pub const QUIT_BUTTON_LABEL: &str = "Quit";
