//! Terminal Blockfall runner.
//!
//! One synchronous loop: poll at most one pending key, apply it, advance
//! the engine one tick, render a snapshot, sleep the fixed interval. The
//! sleep is the only suspension point.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::input::TerminalInput;
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::TICK_MS;

/// Why the game loop ended.
enum Exit {
    /// Player quit: terminate silently.
    Quit,
    /// Stack topped out: report the final score.
    GameOver(u32),
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let outcome = run(&mut term);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();

    match outcome? {
        Exit::Quit => {}
        Exit::GameOver(score) => {
            println!("Game Over!");
            println!("Final Score: {score}");
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<Exit> {
    let mut game = GameEngine::new(clock_seed());
    let mut input = TerminalInput::new();
    let view = GameView::new();
    let mut snapshot = GameSnapshot::default();
    let mut fb = view.frame_buffer();

    let tick = Duration::from_millis(TICK_MS);

    loop {
        if game.is_game_over() {
            // Show the final board briefly before reporting.
            game.snapshot_into(&mut snapshot);
            view.render_into(&snapshot, &mut fb);
            term.draw(&fb)?;
            thread::sleep(tick);
            return Ok(Exit::GameOver(game.score()));
        }

        if let Some(cmd) = input.poll_command()? {
            game.apply_command(cmd);
        }
        if game.quit_requested() {
            return Ok(Exit::Quit);
        }

        game.tick();

        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, &mut fb);
        term.draw(&fb)?;

        thread::sleep(tick);
    }
}

/// Seed the piece generator from the wall clock, once at startup.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
