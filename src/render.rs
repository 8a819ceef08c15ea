use macroquad::prelude::*;

use falling_blocks::frame::DrawCommand;
use falling_blocks::PieceColor;

const BACKGROUND_COLOR: Color = BLACK;
const MESSAGE_COLOR: Color = RED;
const MESSAGE_FONT_SIZE: u16 = 24;

pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Cyan => Color { r: 0.0, g: 1.0, b: 1.0, a: 1.0 },
        PieceColor::Yellow => Color { r: 1.0, g: 1.0, b: 0.0, a: 1.0 },
        PieceColor::Green => Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 },
        PieceColor::Red => Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 },
        PieceColor::Purple => Color { r: 0.6667, g: 0.0, b: 1.0, a: 1.0 },
        PieceColor::Orange => Color { r: 1.0, g: 0.3334, b: 0.0, a: 1.0 },
        PieceColor::Blue => Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 },
    }
}

/// Clears the window and replays `commands`.
pub fn draw_frame(commands: &[DrawCommand], cell_size: f32) {
    clear_background(BACKGROUND_COLOR);
    for command in commands {
        match *command {
            DrawCommand::FillCell { row, col, color } => {
                let x = col as f32 * cell_size;
                let y = row as f32 * cell_size;
                draw_block(x, y, cell_size, piece_color(color));
            }
            DrawCommand::ShowText { text } => draw_message(text),
        }
    }
}

fn draw_message(text: &str) {
    let measure = measure_text(text, None, MESSAGE_FONT_SIZE, 1.0);
    let x = (screen_width() - measure.width) / 2.0;
    let y = (screen_height() + measure.height) / 2.0;
    draw_text(text, x, y, MESSAGE_FONT_SIZE as f32, MESSAGE_COLOR);
}

fn draw_block(x: f32, y: f32, size: f32, color: Color) {
    draw_rectangle(x, y, size, size, color);
    let highlight = Color::new(
        (color.r + 0.4).min(1.0),
        (color.g + 0.4).min(1.0),
        (color.b + 0.4).min(1.0),
        1.0,
    );
    let shadow = Color::new(color.r * 0.5, color.g * 0.5, color.b * 0.5, 1.0);
    let border = size * 0.15;
    draw_rectangle(x, y, size, border, highlight);
    draw_rectangle(x, y, border, size, highlight);
    draw_rectangle(x, y + size - border, size, border, shadow);
    draw_rectangle(x + size - border, y, border, size, shadow);
}
