use crate::shape::PieceColor;

/// `None` is an empty cell; a filled cell always carries its color.
pub type Cell = Option<PieceColor>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![None; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Callers check bounds first.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_some()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Writes each cell permanently. The cells must already have passed a
    /// validity check; rows above the top edge have no storage and are skipped.
    pub fn lock<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (i32, i32, PieceColor)>,
    {
        for (row, col, color) in cells {
            if row < 0 || col < 0 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            if row < self.height && col < self.width {
                self.cells[row][col] = Some(color);
            }
        }
    }

    /// Removes every full row in one pass and pads the top with blank rows.
    /// Returns how many rows were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut new_cells: Vec<Vec<Cell>> = self
            .cells
            .drain(..)
            .filter(|row| !row.iter().all(Option::is_some))
            .collect();
        let cleared = self.height - new_cells.len();
        while new_cells.len() < self.height {
            new_cells.insert(0, vec![None; self.width]);
        }
        self.cells = new_cells;
        cleared
    }
}
