use crate::shape::{rotate_clockwise, rotate_counter_clockwise, Matrix, PieceColor, Shape, ShapeKind};

/// Grid position; `row` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

/// The falling piece: a matrix anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: PieceColor,
    pub anchor: Position,
}

impl ActivePiece {
    /// Anchors `shape` on row 0, centered on a board `board_width` wide.
    pub fn spawn(shape: Shape, board_width: usize) -> Self {
        let shape_width = shape.matrix.first().map_or(0, Vec::len);
        let col = (board_width / 2) as i32 - (shape_width / 2) as i32;
        Self {
            kind: shape.kind,
            matrix: shape.matrix,
            color: shape.color,
            anchor: Position::new(0, col),
        }
    }

    pub fn width(&self) -> usize {
        self.matrix.first().map_or(0, Vec::len)
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        self.matrix.len()
    }

    /// Absolute positions of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        cells_at(&self.matrix, self.anchor)
    }

    pub fn rotate_clockwise(&mut self) {
        self.matrix = rotate_clockwise(&self.matrix);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.matrix = rotate_counter_clockwise(&self.matrix);
    }
}

pub fn cells_at(matrix: &[Vec<u8>], anchor: Position) -> impl Iterator<Item = Position> + '_ {
    matrix.iter().enumerate().flat_map(move |(i, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(j, _)| anchor.offset(i as i32, j as i32))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centers_on_the_board() {
        assert_eq!(ActivePiece::spawn(ShapeKind::O.shape(), 10).anchor, Position::new(0, 4));
        assert_eq!(ActivePiece::spawn(ShapeKind::I.shape(), 10).anchor, Position::new(0, 3));
        assert_eq!(ActivePiece::spawn(ShapeKind::T.shape(), 10).anchor, Position::new(0, 4));
        assert_eq!(ActivePiece::spawn(ShapeKind::T.shape(), 7).anchor, Position::new(0, 2));
    }

    #[test]
    fn cells_are_offset_by_the_anchor() {
        let mut piece = ActivePiece::spawn(ShapeKind::S.shape(), 10);
        piece.anchor = Position::new(5, 2);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(5, 2),
                Position::new(5, 3),
                Position::new(6, 3),
                Position::new(6, 4),
            ]
        );
    }

    #[test]
    fn rotation_swaps_dimensions_and_reverts_exactly() {
        let mut piece = ActivePiece::spawn(ShapeKind::J.shape(), 10);
        let original = piece.clone();
        piece.rotate_clockwise();
        assert_eq!((piece.width(), piece.height()), (2, 3));
        assert_eq!(piece.anchor, original.anchor);
        piece.rotate_counter_clockwise();
        assert_eq!(piece, original);
    }
}
