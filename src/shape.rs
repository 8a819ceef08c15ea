use rand::Rng;

/// Row-major 0/1 grid, 1 = filled.
pub type Matrix = Vec<Vec<u8>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    S,
    Z,
    T,
    L,
    J,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Green,
    Red,
    Purple,
    Orange,
    Blue,
}

/// Canonical catalog entry. Never handed out for mutation, see [`ShapeDef::matrix`].
#[derive(Debug)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub cells: &'static [&'static [u8]],
    pub color: PieceColor,
}

impl ShapeDef {
    pub fn matrix(&self) -> Matrix {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    pub fn shape(&self) -> Shape {
        Shape {
            kind: self.kind,
            matrix: self.matrix(),
            color: self.color,
        }
    }
}

pub const SHAPES: [ShapeDef; 7] = [
    ShapeDef { kind: ShapeKind::I, cells: &[&[1, 1, 1, 1]], color: PieceColor::Cyan },
    ShapeDef { kind: ShapeKind::O, cells: &[&[1, 1], &[1, 1]], color: PieceColor::Yellow },
    ShapeDef { kind: ShapeKind::S, cells: &[&[1, 1, 0], &[0, 1, 1]], color: PieceColor::Green },
    ShapeDef { kind: ShapeKind::Z, cells: &[&[0, 1, 1], &[1, 1, 0]], color: PieceColor::Red },
    ShapeDef { kind: ShapeKind::T, cells: &[&[1, 1, 1], &[0, 1, 0]], color: PieceColor::Purple },
    ShapeDef { kind: ShapeKind::L, cells: &[&[1, 1, 1], &[1, 0, 0]], color: PieceColor::Orange },
    ShapeDef { kind: ShapeKind::J, cells: &[&[1, 1, 1], &[0, 0, 1]], color: PieceColor::Blue },
];

impl ShapeKind {
    pub fn def(self) -> &'static ShapeDef {
        &SHAPES[self as usize]
    }

    pub fn shape(self) -> Shape {
        self.def().shape()
    }
}

/// A catalog shape with its own copy of the matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: PieceColor,
}

pub fn list_shapes() -> &'static [ShapeDef] {
    &SHAPES
}

pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    SHAPES[rng.random_range(0..SHAPES.len())].shape()
}

/// Reverse the rows, then transpose.
pub fn rotate_clockwise(matrix: &[Vec<u8>]) -> Matrix {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| (0..rows).map(|r| matrix[rows - 1 - r][c]).collect())
        .collect()
}

/// Transpose, then reverse the rows. Exact inverse of [`rotate_clockwise`].
pub fn rotate_counter_clockwise(matrix: &[Vec<u8>]) -> Matrix {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| (0..rows).map(|r| matrix[r][cols - 1 - c]).collect())
        .collect()
}
