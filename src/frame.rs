use rand::Rng;

use crate::game::Game;
use crate::shape::PieceColor;

pub const GAME_OVER_TEXT: &str = "Game Over";

/// What a renderer draws for one frame, in order. Renderers clear their
/// surface first; nothing here is incremental.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    FillCell { row: usize, col: usize, color: PieceColor },
    /// Centered message in the highlight color.
    ShowText { text: &'static str },
}

pub fn compose<R: Rng>(game: &Game<R>) -> Vec<DrawCommand> {
    let board = game.board();
    let mut commands = Vec::new();

    for (row, cells) in board.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(color) = *cell {
                commands.push(DrawCommand::FillCell { row, col, color });
            }
        }
    }

    if let Some(piece) = game.piece() {
        let (width, height) = (board.width() as i32, board.height() as i32);
        for pos in piece.cells() {
            if (0..height).contains(&pos.row) && (0..width).contains(&pos.col) {
                commands.push(DrawCommand::FillCell {
                    row: pos.row as usize,
                    col: pos.col as usize,
                    color: piece.color,
                });
            }
        }
    }

    if game.is_over() {
        commands.push(DrawCommand::ShowText { text: GAME_OVER_TEXT });
    }
    commands
}
