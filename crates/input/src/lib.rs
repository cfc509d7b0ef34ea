//! Input source: non-blocking terminal key polling.
//!
//! The key map is a pure function over crossterm key events so it can be
//! tested without a terminal; `TerminalInput` wraps the raw event queue
//! and hands the engine at most one command per poll.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blockfall_types::Command;

/// Map one key event to a command.
///
/// Arrows move and rotate, Space hard-drops, Esc quits. Ctrl-C also quits:
/// in raw mode the terminal no longer turns it into a signal, so it is
/// honored here. Anything else yields no command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::RotateCw),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Polls the terminal event queue without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Return at most one pending command.
    ///
    /// Consumes a single queued event per call even when more are
    /// waiting; non-key events and key repeats/releases yield `None`.
    pub fn poll_command(&mut self) -> Result<Option<Command>> {
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
        Ok(None)
    }
}
