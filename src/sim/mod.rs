//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{circle_overlaps_rect, crosses_side_wall, crosses_top_wall, out_of_bounds};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickColor, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
