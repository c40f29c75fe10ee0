//! Fixed timestep simulation tick
//!
//! Advances the two-phase game state machine by one 60 Hz step.

use glam::Vec2;

use super::collision::{circle_overlaps_rect, crosses_side_wall, crosses_top_wall, out_of_bounds};
use super::state::{Ball, GamePhase, GameState};
use crate::consts::{BALL_RADIUS, PADDLE_SPEED};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Position of a left-button press this tick (one-shot)
    pub click: Option<Vec2>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::Won => tick_won(state, input),
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    // Paddle movement, clamped to the screen
    if input.left {
        state.paddle.shift(-PADDLE_SPEED);
    }
    if input.right {
        state.paddle.shift(PADDLE_SPEED);
    }

    // Euler integration, no sub-stepping
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Walls: sides flip x, the top flips y, the bottom is open
    if crosses_side_wall(ball.pos, BALL_RADIUS) {
        ball.vel.x = -ball.vel.x;
    }
    if crosses_top_wall(ball.pos, BALL_RADIUS) {
        ball.vel.y = -ball.vel.y;
    }

    // Paddle bounce. Re-triggerable on every tick the ball overlaps the
    // paddle; there is no overlap-exit check.
    if circle_overlaps_rect(ball.pos, BALL_RADIUS, &state.paddle.rect) {
        ball.vel.y = -ball.vel.y;
    }

    // Brick pass: every overlapping brick dies, only the first hit in
    // row-major order gets the bounce
    let mut bounced = false;
    for brick in state.bricks.iter_mut() {
        if brick.active && circle_overlaps_rect(ball.pos, BALL_RADIUS, &brick.rect) {
            brick.active = false;
            if !bounced {
                ball.vel.y = -ball.vel.y;
                bounced = true;
            }
        }
    }

    // Falling out the bottom costs a life; at zero the whole round resets,
    // otherwise only the ball is served again
    if out_of_bounds(state.ball.pos, BALL_RADIUS) {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.reset_round();
            return;
        }
        state.ball = Ball::serve();
    }

    // Win once the grid is empty
    if state.bricks.all_cleared() {
        state.phase = GamePhase::Won;
    }
}

fn tick_won(state: &mut GameState, input: &TickInput) {
    // Only the reset button is interactive on the win screen
    if let Some(point) = input.click {
        if state.reset_button.contains_point(point) {
            state.reset_round();
        }
    }
}
