//! Shared types and constants.
//!
//! Pure data with no external dependencies, usable from the core engine,
//! the input layer, and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the spawn row)
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed sleep per loop iteration |
//! | `FALL_BASE_TICKS` | 20 | A piece falls every `max(1, 20 - level)` ticks |
//! | `LINE_SCORES` | 0/100/300/500/800 | Points for 0-4 cleared lines |
//! | `LEVEL_SCORE_STEP` | 1000 | Level is `1 + score / 1000` |

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed loop sleep in milliseconds; the de facto game-speed base unit.
pub const TICK_MS: u64 = 100;

/// Gravity base in ticks. The active piece falls one row every
/// `max(1, FALL_BASE_TICKS - level)` ticks, so higher levels fall faster.
pub const FALL_BASE_TICKS: u32 = 20;

/// Line clear scoring table, indexed by lines cleared in one lock (0-4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Score per level: level is recomputed as `1 + score / LEVEL_SCORE_STEP`
/// after every scoring update.
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// The seven piece variants.
///
/// Each variant has a fixed base occupancy matrix (see `blockfall-core`)
/// and a fixed color identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All variants, in color-id order. Used for uniform random draws.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fixed color identifier, 1-7. Zero is reserved for empty cells in
    /// exported board grids.
    pub const fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// Player commands applied to the engine.
///
/// Commands never fail: an illegal move or rotation is silently rejected,
/// and a blocked downward move triggers the lock sequence instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the active piece one column left.
    MoveLeft,
    /// Shift the active piece one column right.
    MoveRight,
    /// Rotate the active piece 90 degrees clockwise, in place.
    RotateCw,
    /// Move the active piece down one row, locking it if it cannot move.
    SoftDrop,
    /// Drop the active piece to its resting row and lock it.
    HardDrop,
    /// Request immediate process termination.
    Quit,
}

/// A cell on the game board: `None` is empty, `Some(kind)` holds the
/// variant whose lock filled it.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ids_are_one_through_seven() {
        let ids: Vec<u8> = PieceKind::ALL.iter().map(|k| k.color_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn scoring_table_matches_ruleset() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(LEVEL_SCORE_STEP, 1000);
        assert_eq!(FALL_BASE_TICKS, 20);
    }
}
