use std::time::Duration;

use macroquad::logging::{debug, error, info};
use macroquad::prelude::*;

use falling_blocks::frame;
use falling_blocks::gravity::GravityTimer;
use falling_blocks::{Game, GameConfig, Step};

mod render;

fn window_conf() -> Conf {
    let (width, height) = GameConfig::default().window_size();
    Conf {
        window_title: "Tetris".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn report(game: &Game, step: Step) {
    if let Step::Locked { lines_cleared } = step {
        debug!("piece locked, {} line(s) cleared", lines_cleared);
        if game.is_over() {
            info!("game over after {} line(s)", game.lines_cleared());
        }
    }
}

fn process_input(game: &mut Game) {
    if is_key_pressed(KeyCode::Left) {
        game.move_left();
    }
    if is_key_pressed(KeyCode::Right) {
        game.move_right();
    }
    if is_key_pressed(KeyCode::Up) {
        game.rotate();
    }
    if is_key_pressed(KeyCode::Down) {
        let step = game.move_down();
        report(game, step);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = GameConfig::default();
    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(err) => {
            error!("{:#}", err);
            return;
        }
    };
    let mut gravity = GravityTimer::new(config.tick_interval());
    info!(
        "starting {}x{} board, gravity every {:?}",
        config.board_width,
        config.board_height,
        gravity.interval()
    );

    loop {
        if !game.is_over() {
            process_input(&mut game);
            let due = gravity.advance(Duration::from_secs_f32(get_frame_time()));
            for _ in 0..due {
                let step = game.tick();
                report(&game, step);
                if game.is_over() {
                    break;
                }
            }
        }
        render::draw_frame(&frame::compose(&game), config.cell_size);
        next_frame().await;
    }
}
