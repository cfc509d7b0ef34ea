//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so the whole frame layout is unit-testable.

use blockfall_core::snapshot::GameSnapshot;
use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal rows above the board frame: title and score line.
const HUD_ROWS: u16 = 2;

/// Board cell width in terminal columns; 2x1 compensates for the typical
/// terminal glyph aspect ratio and gives each cell its two-character glyph.
const CELL_W: u16 = 2;

/// Full frame width: board plus the border columns.
pub const FRAME_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_W + 2;

/// Full frame height: HUD, board, and the border rows.
pub const FRAME_HEIGHT: u16 = HUD_ROWS + BOARD_HEIGHT as u16 + 2;

const BLOCK: char = '█';

/// Renders snapshots into framebuffers of `FRAME_WIDTH` x `FRAME_HEIGHT`.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into a caller-owned framebuffer, resizing nothing: the
    /// buffer must match the frame dimensions (see `frame_buffer`).
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let text = CellStyle::default();
        fb.clear(crate::fb::Cell::default());

        // HUD.
        fb.put_str(0, 0, "BLOCKFALL", CellStyle { bold: true, ..text });
        fb.put_str(
            0,
            1,
            &format!("Score: {}  Level: {}", snap.score, snap.level),
            text,
        );

        self.draw_border(fb, text);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let color = snap.board[y as usize][x as usize];
                if color != 0 {
                    self.draw_cell(fb, x, y, color);
                }
            }
        }

        // Active piece; rows above the board are simply not drawn.
        let active = &snap.active;
        for (dx, dy) in active.shape.offsets() {
            let x = active.x + dx;
            let y = active.y + dy;
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_cell(fb, x as u16, y as u16, active.color_id);
            }
        }

        if snap.game_over {
            let mid = HUD_ROWS + 1 + BOARD_HEIGHT as u16 / 2;
            let msg = "GAME OVER";
            let x = (FRAME_WIDTH - msg.chars().count() as u16) / 2;
            fb.put_str(x, mid, msg, CellStyle { bold: true, ..text });
        }
    }

    /// Convenience allocation of a correctly sized frame.
    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = self.frame_buffer();
        self.render_into(snap, &mut fb);
        fb
    }

    /// A framebuffer of the fixed frame dimensions.
    pub fn frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let top = HUD_ROWS;
        let bottom = FRAME_HEIGHT - 1;

        fb.put_char(0, top, '┌', style);
        fb.put_char(FRAME_WIDTH - 1, top, '┐', style);
        fb.put_char(0, bottom, '└', style);
        fb.put_char(FRAME_WIDTH - 1, bottom, '┘', style);
        for x in 1..FRAME_WIDTH - 1 {
            fb.put_char(x, top, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in top + 1..bottom {
            fb.put_char(0, y, '│', style);
            fb.put_char(FRAME_WIDTH - 1, y, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, color_id: u8) {
        let style = CellStyle {
            fg: color_rgb(color_id),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let px = 1 + x * CELL_W;
        let py = HUD_ROWS + 1 + y;
        fb.put_char(px, py, BLOCK, style);
        fb.put_char(px + 1, py, BLOCK, style);
    }
}

/// Palette keyed by the board's color identifiers (1-7).
fn color_rgb(color_id: u8) -> Rgb {
    match color_id {
        1 => Rgb::new(80, 220, 220),  // I
        2 => Rgb::new(240, 220, 80),  // O
        3 => Rgb::new(200, 120, 220), // T
        4 => Rgb::new(100, 220, 120), // S
        5 => Rgb::new(220, 80, 80),   // Z
        6 => Rgb::new(80, 120, 220),  // J
        7 => Rgb::new(255, 165, 0),   // L
        _ => Rgb::new(220, 220, 220),
    }
}
