//! Game state and core simulation types
//!
//! Everything the tick function reads or mutates lives here; there are no
//! process-wide globals and no rendering or platform dependencies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All bricks cleared; waiting for a reset click
    Won,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick; each axis keeps magnitude `BALL_SPEED` and
    /// only flips sign on a bounce
    pub vel: Vec2,
}

impl Ball {
    /// Ball at screen center with the fixed serve velocity
    pub fn serve() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::splat(BALL_SPEED),
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered horizontally at its fixed height
    pub fn centered() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_MARGIN_BOTTOM,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    /// Shift horizontally, clamped to `[0, SCREEN_WIDTH - width]`
    pub fn shift(&mut self, dx: f32) {
        self.rect.x = (self.rect.x + dx).clamp(0.0, SCREEN_WIDTH - self.rect.w);
    }
}

/// An opaque RGB brick color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrickColor {
    /// Random color with each channel uniform in [50, 255]
    pub fn random(rng: &mut Pcg32) -> Self {
        Self {
            r: rng.random_range(50..=255),
            g: rng.random_range(50..=255),
            b: rng.random_range(50..=255),
        }
    }
}

/// A single brick cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    /// Cleared permanently on the first ball hit; only a grid
    /// regeneration brings it back
    pub active: bool,
    pub color: BrickColor,
}

/// Row-major arena of bricks
///
/// Bricks are stored flat; `(row, col)` maps to `row * BRICK_COLS + col`.
/// Iteration order doubles as the tie-break order for same-tick hits.
#[derive(Debug, Clone, PartialEq)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Generate a fresh grid: every brick active, freshly colored
    pub fn generate(rng: &mut Pcg32) -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let rect = Rect::new(
                    col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_GAP,
                    row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_TOP_OFFSET,
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                );
                bricks.push(Brick {
                    rect,
                    active: true,
                    color: BrickColor::random(rng),
                });
            }
        }
        Self { bricks }
    }

    /// Flat index of a `(row, col)` cell
    #[inline]
    pub fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < BRICK_ROWS && col < BRICK_COLS);
        row * BRICK_COLS + col
    }

    pub fn get(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[Self::index(row, col)]
    }

    /// Row-major iteration over all cells
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    /// Number of bricks still standing
    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// True once every brick has been destroyed
    pub fn all_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }
}

/// Complete game state: one owner, passed explicitly to tick and draw
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// State-owned RNG, advanced only by grid generation
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Remaining lives
    pub lives: u8,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Reset button hit area, interactive only in `Won`
    pub reset_button: Rect,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed and a fresh round
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = BrickGrid::generate(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            lives: MAX_LIVES,
            ball: Ball::serve(),
            paddle: Paddle::centered(),
            bricks,
            reset_button: Rect::new(
                SCREEN_WIDTH / 2.0 - RESET_BUTTON_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 + 50.0,
                RESET_BUTTON_WIDTH,
                RESET_BUTTON_HEIGHT,
            ),
            time_ticks: 0,
        }
    }

    /// Start a fresh round: full lives, served ball, centered paddle and a
    /// regenerated grid with new colors
    pub fn reset_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.lives = MAX_LIVES;
        self.ball = Ball::serve();
        self.paddle = Paddle::centered();
        self.bricks = BrickGrid::generate(&mut self.rng);
        log::info!(
            "round reset: {} bricks, {} lives",
            self.bricks.active_count(),
            self.lives
        );
    }
}
