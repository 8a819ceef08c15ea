use std::time::Duration;

use anyhow::{bail, Result};

pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 20;
pub const DEFAULT_CELL_SIZE: f32 = 30.0;
pub const DEFAULT_TICK_MS: u64 = 500;

// Every tetromino must fit somewhere on the board.
const MIN_BOARD_SIDE: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Pixels per grid cell.
    pub cell_size: f32,
    pub tick_interval_ms: u64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.board_width < MIN_BOARD_SIDE || self.board_height < MIN_BOARD_SIDE {
            bail!(
                "board must be at least {MIN_BOARD_SIDE}x{MIN_BOARD_SIDE}, got {}x{}",
                self.board_width,
                self.board_height
            );
        }
        if !(self.cell_size > 0.0) {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be non-zero");
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn window_size(&self) -> (f32, f32) {
        (
            self.board_width as f32 * self.cell_size,
            self.board_height as f32 * self.cell_size,
        )
    }
}
