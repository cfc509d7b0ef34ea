//! Display sink: framebuffer, game view, and terminal renderer.
//!
//! The split keeps the frame layout pure and testable: [`view::GameView`]
//! turns a snapshot into a [`fb::FrameBuffer`], and only
//! [`renderer::TerminalRenderer`] touches the terminal.

pub mod fb;
pub mod renderer;
pub mod view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{GameView, FRAME_HEIGHT, FRAME_WIDTH};
