//! Brickfall - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Draw pass over the macroquad surface

pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Paddle defaults - slides along the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance of the paddle top from the bottom of the screen
    pub const PADDLE_MARGIN_BOTTOM: f32 = 50.0;
    /// Horizontal paddle speed (units per tick)
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed (units per tick); only the sign ever changes
    pub const BALL_SPEED: f32 = 4.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 78.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    /// Gap between neighboring bricks (both axes)
    pub const BRICK_GAP: f32 = 2.0;
    /// Vertical offset of the first brick row from the top of the screen
    pub const BRICK_TOP_OFFSET: f32 = 60.0;

    /// Lives per round
    pub const MAX_LIVES: u8 = 3;

    /// Reset button shown on the win screen
    pub const RESET_BUTTON_WIDTH: f32 = 200.0;
    pub const RESET_BUTTON_HEIGHT: f32 = 50.0;
}
