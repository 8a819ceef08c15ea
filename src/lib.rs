//! Headless falling-block puzzle simulation.
//!
//! [`game::Game`] owns the board and the falling piece; windowing, input and
//! timers live outside and call into it.

pub mod board;
pub mod collision;
pub mod config;
pub mod frame;
pub mod game;
pub mod gravity;
pub mod piece;
pub mod shape;

pub use board::Board;
pub use config::GameConfig;
pub use game::{Game, Step};
pub use piece::{ActivePiece, Position};
pub use shape::{PieceColor, Shape, ShapeKind};
