//! The game engine: board, active piece, scoring, and the rules that tie
//! them together.
//!
//! The engine is pure state plus transitions. It knows nothing about
//! terminals or timing beyond its tick counter; the runner polls input,
//! applies commands, ticks once per loop iteration, and renders from a
//! snapshot.

use crate::board::Board;
use crate::piece::FallingPiece;
use crate::rng::PieceRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, FALL_BASE_TICKS, LEVEL_SCORE_STEP, LINE_SCORES};

/// Complete state of one game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: FallingPiece,
    rng: PieceRng,
    score: u32,
    level: u32,
    fall_timer: u32,
    game_over: bool,
    quit: bool,
}

impl GameEngine {
    /// Start a game: empty board, score 0, level 1, and a first piece of a
    /// uniformly random variant centered on the spawn row.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let active = FallingPiece::spawn(rng.next_kind());
        Self {
            board: Board::new(),
            active,
            rng,
            score: 0,
            level: 1,
            fall_timer: 0,
            game_over: false,
            quit: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &FallingPiece {
        &self.active
    }

    /// True once the stack has reached the top row or a spawn was blocked.
    /// Terminal: the runner stops the loop and reports the final score.
    pub fn is_game_over(&self) -> bool {
        self.game_over || self.board.top_row_occupied()
    }

    /// True after a Quit command; the runner terminates without a score
    /// report.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Apply one player command. Commands never fail: illegal moves and
    /// rotations are silently rejected, and a blocked downward move runs
    /// the lock sequence instead.
    pub fn apply_command(&mut self, cmd: Command) {
        if self.game_over {
            return;
        }
        match cmd {
            Command::MoveLeft => {
                self.try_shift(-1, 0);
            }
            Command::MoveRight => {
                self.try_shift(1, 0);
            }
            Command::RotateCw => {
                self.try_rotate_cw();
            }
            Command::SoftDrop => {
                if !self.try_shift(0, 1) {
                    self.lock_and_advance();
                }
            }
            Command::HardDrop => {
                while self.try_shift(0, 1) {}
                self.lock_and_advance();
            }
            Command::Quit => {
                self.quit = true;
            }
        }
    }

    /// Advance the fall timer; once it reaches the level-dependent
    /// threshold, reset it and move the piece down one row, locking when
    /// the move is illegal. The only source of automatic descent.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }
        self.fall_timer += 1;
        if self.fall_timer >= self.fall_threshold() {
            self.fall_timer = 0;
            if !self.try_shift(0, 1) {
                self.lock_and_advance();
            }
        }
    }

    /// Ticks between automatic falls at the current level, floored at 1.
    pub fn fall_threshold(&self) -> u32 {
        FALL_BASE_TICKS.saturating_sub(self.level).max(1)
    }

    /// Add the line-clear award and recompute the level from the new
    /// score. The level is derived, never incremented, so it can only
    /// stay or rise as the score grows.
    pub fn update_score(&mut self, lines_cleared: usize) {
        self.score += LINE_SCORES[lines_cleared.min(LINE_SCORES.len() - 1)];
        self.level = 1 + self.score / LEVEL_SCORE_STEP;
    }

    /// Shift the active piece by (dx, dy) when the target placement is
    /// legal. Any successful descent resets the fall timer.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let x = self.active.x + dx;
        let y = self.active.y + dy;
        if self.board.can_place(&self.active.shape, x, y) {
            self.active.x = x;
            self.active.y = y;
            if dy > 0 {
                self.fall_timer = 0;
            }
            true
        } else {
            false
        }
    }

    /// Replace the active matrix with its clockwise turn when the rotated
    /// matrix fits at the unchanged anchor; no wall-kick search.
    fn try_rotate_cw(&mut self) -> bool {
        let rotated = self.active.shape.rotated_cw();
        if self.board.can_place(&rotated, self.active.x, self.active.y) {
            self.active.shape = rotated;
            true
        } else {
            false
        }
    }

    /// Lock the active piece into the board, clear full rows, score them,
    /// and spawn the next piece. A blocked spawn ends the game.
    fn lock_and_advance(&mut self) {
        self.board
            .lock(&self.active.shape, self.active.x, self.active.y, self.active.kind);

        let cleared = self.board.clear_full_rows();
        self.update_score(cleared.len());

        let next = FallingPiece::spawn(self.rng.next_kind());
        if !self.board.can_place(&next.shape, next.x, next.y) {
            self.game_over = true;
        }
        self.active = next;
        self.fall_timer = 0;
    }

    /// Fill a caller-owned snapshot with the renderable state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.is_game_over();
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn fall_timer(&self) -> u32 {
        self.fall_timer
    }
}
