use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::collision::is_valid;
use crate::config::GameConfig;
use crate::piece::{ActivePiece, Position};
use crate::shape::{random_shape, Shape};

/// Result of a downward step, whether from gravity or the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// The piece could not descend and was written into the board.
    Locked { lines_cleared: usize },
    /// The game is over.
    Ignored,
}

/// The simulation: one board, one falling piece and the game-over flag.
///
/// Every operation runs to completion; callers decide when to invoke them
/// (timer, key press), the game does not distinguish the source.
pub struct Game<R = StdRng> {
    board: Board,
    piece: Option<ActivePiece>,
    over: bool,
    lines_cleared: usize,
    rng: R,
}

impl Game<StdRng> {
    /// Validates `config`, then starts a game seeded from it (or from the OS).
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::with_rng(config.board_width, config.board_height, rng))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        Self::with_board(Board::new(width, height), rng)
    }

    /// Starts on an existing board and spawns the first piece.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut game = Self {
            board,
            piece: None,
            over: false,
            lines_cleared: 0,
            rng,
        };
        game.spawn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> Option<&ActivePiece> {
        self.piece.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    /// Spawns a random piece. Returns false, and ends the game, if it is blocked.
    pub fn spawn(&mut self) -> bool {
        let shape = random_shape(&mut self.rng);
        self.spawn_shape(shape)
    }

    pub fn spawn_shape(&mut self, shape: Shape) -> bool {
        if self.over {
            return false;
        }
        let piece = ActivePiece::spawn(shape, self.board.width());
        let fits = is_valid(&piece.matrix, piece.anchor, &self.board);
        // A blocked piece stays current so it is still drawn.
        self.piece = Some(piece);
        if !fits {
            self.over = true;
        }
        fits
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(0, 1)
    }

    /// One row down, locking the piece if it is resting on something.
    pub fn move_down(&mut self) -> Step {
        if self.over {
            return Step::Ignored;
        }
        if self.shift(1, 0) {
            return Step::Moved;
        }
        let lines_cleared = self.lock();
        self.spawn();
        Step::Locked { lines_cleared }
    }

    /// Gravity step; identical to [`Game::move_down`].
    pub fn tick(&mut self) -> Step {
        self.move_down()
    }

    /// Rotates clockwise in place; reverted with the inverse turn if it does not fit.
    pub fn rotate(&mut self) -> bool {
        if self.over {
            return false;
        }
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        piece.rotate_clockwise();
        if is_valid(&piece.matrix, piece.anchor, &self.board) {
            return true;
        }
        piece.rotate_counter_clockwise();
        false
    }

    fn shift(&mut self, d_row: i32, d_col: i32) -> bool {
        if self.over {
            return false;
        }
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        let target = piece.anchor.offset(d_row, d_col);
        if !is_valid(&piece.matrix, target, &self.board) {
            return false;
        }
        piece.anchor = target;
        true
    }

    fn lock(&mut self) -> usize {
        if let Some(piece) = self.piece.take() {
            let color = piece.color;
            self.board
                .lock(piece.cells().map(|Position { row, col }| (row, col, color)));
        }
        let cleared = self.board.clear_full_lines();
        self.lines_cleared += cleared;
        cleared
    }
}
