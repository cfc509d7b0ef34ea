//! Core game logic: pure, deterministic, and testable.
//!
//! Everything with rules to get right lives here: the board, the shape
//! matrices and their rotation, piece generation, movement/collision,
//! line clearing, and scoring. The crate has zero terminal or I/O
//! dependencies, so the whole ruleset runs headless under tests.
//!
//! # Ruleset
//!
//! - Pieces are drawn uniformly from the 7 variants by an engine-owned,
//!   seed-injectable generator.
//! - Rotation replaces the occupancy matrix with its clockwise turn; a
//!   rotation that does not fit at the current anchor is discarded (no
//!   wall kicks).
//! - Gravity moves the piece one row every `max(1, 20 - level)` ticks.
//! - Clearing 1/2/3/4 rows scores 100/300/500/800; the level is derived
//!   as `1 + score / 1000`.
//! - The game ends when the stack reaches the top row or a fresh spawn
//!   cannot be placed.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_core::types::Command;
//!
//! let mut game = GameEngine::new(12345);
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::HardDrop);
//! game.tick();
//! assert!(!game.quit_requested());
//! ```

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use game::GameEngine;
pub use piece::{base_shape, FallingPiece, Shape};
pub use rng::{PieceRng, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
