//! Dino Jump entry point
//!
//! Opens the window and runs the game loop: poll input, tick, draw, present.

use macroquad::prelude::*;

use dino_jump::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use dino_jump::platform::poll_commands;
use dino_jump::{App, Tuning, renderer};

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Dino Jump starting...");

    // Window close is reported as a command instead of exiting mid-frame
    prevent_quit();

    let mut app = App::new(Tuning::default(), get_time());
    log::info!("Window ready ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT);

    loop {
        #[cfg(not(target_arch = "wasm32"))]
        let frame_start = std::time::Instant::now();

        app.handle(&poll_commands());
        if app.should_quit() {
            break;
        }

        app.update(get_time());
        renderer::render(&app.state);

        #[cfg(not(target_arch = "wasm32"))]
        dino_jump::platform::time::throttle(frame_start);

        next_frame().await;
    }

    log::info!("Dino Jump exiting");
}
