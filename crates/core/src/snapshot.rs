//! Renderable view of the engine state.
//!
//! The display layer consumes these instead of reaching into the engine,
//! and `GameEngine::snapshot_into` fills a caller-owned snapshot so the
//! render path allocates nothing per frame.

use crate::piece::{FallingPiece, Shape};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as the display needs it: matrix, anchor, color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color_id: u8,
}

impl From<FallingPiece> for ActiveSnapshot {
    fn from(piece: FallingPiece) -> Self {
        Self {
            shape: piece.shape,
            x: piece.x,
            y: piece.y,
            color_id: piece.kind.color_id(),
        }
    }
}

/// Everything the display sink renders: board colors, the active piece,
/// and the HUD numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Color identifier per cell, 0 for empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                shape: crate::piece::base_shape(crate::types::PieceKind::I),
                x: 0,
                y: 0,
                color_id: 0,
            },
            score: 0,
            level: 1,
            game_over: false,
        }
    }
}
