//! Frame drawing
//!
//! A pure draw pass over an immutable game state: paddle, ball, bricks and
//! the lives row while playing; the win banner and reset button once won.

use macroquad::prelude::*;

use crate::consts::{BALL_RADIUS, MAX_LIVES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState};

/// Near-white clear color
const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
/// Tint for hearts representing spent lives
const SPENT_LIFE_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.3);

/// Draw one frame
pub fn draw(state: &GameState, heart: &Texture2D) {
    clear_background(BACKGROUND);

    match state.phase {
        GamePhase::Playing => draw_playing(state, heart),
        GamePhase::Won => draw_won(state),
    }
}

fn draw_playing(state: &GameState, heart: &Texture2D) {
    let paddle = &state.paddle.rect;
    draw_rectangle(paddle.x, paddle.y, paddle.w, paddle.h, BLUE);

    draw_circle(state.ball.pos.x, state.ball.pos.y, BALL_RADIUS, RED);

    for brick in state.bricks.iter().filter(|b| b.active) {
        let c = brick.color;
        draw_rectangle(
            brick.rect.x,
            brick.rect.y,
            brick.rect.w,
            brick.rect.h,
            Color::from_rgba(c.r, c.g, c.b, 255),
        );
    }

    // Lives row: one heart per slot, spent ones faded
    for slot in 0..MAX_LIVES {
        let tint = if slot < state.lives {
            WHITE
        } else {
            SPENT_LIFE_TINT
        };
        let x = 10.0 + f32::from(slot) * (heart.width() + 5.0);
        draw_texture(heart, x, 10.0, tint);
    }
}

fn draw_won(state: &GameState) {
    let banner = "YOU WIN!";
    let dims = measure_text(banner, None, 40, 1.0);
    draw_text(
        banner,
        SCREEN_WIDTH / 2.0 - dims.width / 2.0,
        SCREEN_HEIGHT / 2.0 - 50.0 + dims.offset_y,
        40.0,
        RED,
    );

    let button = &state.reset_button;
    draw_rectangle_lines(button.x, button.y, button.w, button.h, 2.0, RED);
    let label = measure_text("Reset", None, 20, 1.0);
    draw_text(
        "Reset",
        button.x + 50.0,
        button.y + 10.0 + label.offset_y,
        20.0,
        BLACK,
    );
}
