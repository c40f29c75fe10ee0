//! Brickfall entry point
//!
//! Creates the window, loads the one texture asset and drives the
//! fixed-timestep simulation loop.

use macroquad::prelude::*;

use brickfall::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_DT};
use brickfall::render;
use brickfall::sim::{GamePhase, GameState, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Brickfall".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Poll the input surface for this frame's commands
fn poll_input() -> TickInput {
    TickInput {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        click: is_mouse_button_pressed(MouseButton::Left).then(|| {
            let (x, y) = mouse_position();
            glam::Vec2::new(x, y)
        }),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Brickfall starting");

    // The heart icon is the only external asset; a missing file is fatal
    let heart = match load_texture("heart.png").await {
        Ok(texture) => texture,
        Err(err) => {
            log::error!("failed to load heart.png: {err:?}");
            std::process::exit(1);
        }
    };

    let seed = macroquad::miniquad::date::now() as u64;
    let mut state = GameState::new(seed);
    log::info!("game initialized with seed {seed}");

    let mut accumulator = 0.0_f32;
    let mut last_phase = state.phase;
    let mut last_lives = state.lives;

    loop {
        let mut input = poll_input();

        // Run whole 60 Hz ticks out of the accumulated frame time
        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input);
            // Clear one-shot inputs after processing
            input.click = None;
            accumulator -= TICK_DT;
            substeps += 1;
        }

        if state.phase != last_phase {
            match state.phase {
                GamePhase::Won => log::info!("all bricks cleared"),
                GamePhase::Playing => log::info!("new round started"),
            }
            last_phase = state.phase;
        }
        if state.lives != last_lives {
            log::info!("lives: {} -> {}", last_lives, state.lives);
            last_lives = state.lives;
        }

        render::draw(&state, &heart);
        next_frame().await;
    }
}
