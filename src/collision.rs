use crate::board::Board;
use crate::piece::{cells_at, Position};

/// True when every filled cell of `matrix` placed at `anchor` is inside the
/// side walls, above the floor and on an empty cell.
///
/// There is no check against the top edge: cells on negative rows count as
/// free, so a piece may hang partly above the visible board.
pub fn is_valid(matrix: &[Vec<u8>], anchor: Position, board: &Board) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;
    cells_at(matrix, anchor).all(|Position { row, col }| {
        if col < 0 || col >= width || row >= height {
            return false;
        }
        row < 0 || !board.is_occupied(row as usize, col as usize)
    })
}
