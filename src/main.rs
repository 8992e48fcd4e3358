//! Tile Bounce entry point
//!
//! Window setup, fatal-on-error asset loading, and the frame loop: drain
//! input, take the step clock's reading as the time step, tick the sim,
//! re-arm the clock, draw. Runs until Escape or the window closes.

use std::path::Path;

use macroquad::prelude::*;

use tilebounce::consts::{DOT_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use tilebounce::level::TileMap;
use tilebounce::renderer::Assets;
use tilebounce::sim::{tick, Dot, DragLauncher, TickInput};
use tilebounce::timer::FrameClock;
use tilebounce::tuning::Tuning;

fn window_conf() -> Conf {
    Conf {
        window_title: "Tile Bounce".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let tuning = Tuning::load_or_default(Path::new("assets/tuning.json"));

    let assets = match Assets::load("assets").await {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("failed to load media: {err}");
            return;
        }
    };
    let map = match TileMap::load(Path::new("assets/level.map")) {
        Ok(map) => map,
        Err(err) => {
            log::error!("failed to load tile map: {err}");
            return;
        }
    };
    log::info!("level loaded, {} tiles", map.tiles().len());

    let mut dot = Dot::new(vec2(DOT_SIZE / 2.0, DOT_SIZE / 2.0));
    let mut launcher = DragLauncher::new();
    let mut step_timer = FrameClock::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::P) {
            if step_timer.is_paused() {
                step_timer.unpause();
            } else if step_timer.is_started() {
                step_timer.pause();
            }
        }

        if !step_timer.is_paused() {
            let input = TickInput {
                press: is_mouse_button_pressed(MouseButton::Left)
                    .then(|| mouse_position().into()),
                release: is_mouse_button_released(MouseButton::Left)
                    .then(|| mouse_position().into()),
            };

            // Variable time step: whatever wall-clock time the previous
            // frame took, as read before re-arming the stopwatch
            let dt = step_timer.elapsed().as_secs_f32();
            tick(&mut dot, &mut launcher, &map, &input, dt, &tuning);
            step_timer.start();
        }

        clear_background(WHITE);
        assets.draw_map(&map);
        assets.draw_dot(&dot);
        if step_timer.is_paused() {
            draw_text("PAUSED", 20.0, 40.0, 40.0, DARKGRAY);
        }

        next_frame().await;
    }
}
