//! Terminal Blockfall runner (default binary).
//!
//! Owns the frame loop: renders the engine snapshot, polls crossterm for key
//! presses, and feeds elapsed frame time to the engine's fall clock.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_blockfall::core::RandomSource;
use tui_blockfall::engine::{GameConfig, GameEngine, GameSnapshot, TickOutcome};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    init_logging();

    let config = GameConfig::from_env();
    info!(
        "starting {}x{} well, {} scoring, seed {:?}",
        config.width,
        config.height,
        config.scoring.as_str(),
        config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route logs to `BLOCKFALL_LOG_PATH`.
///
/// The game owns the alternate screen, so stderr output would corrupt the
/// frame. Without a usable log file no logger is installed at all, so
/// `RUST_LOG` alone cannot turn stderr logging on.
fn init_logging() {
    init_logging_to(std::env::var("BLOCKFALL_LOG_PATH").ok());
}

/// Returns true if a logger was installed.
fn init_logging_to(path: Option<String>) -> bool {
    let Some(file) = path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .and_then(|p| File::create(p).ok())
    else {
        return false;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let source = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let mut game = GameEngine::new(config, source);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Fall clock.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            if let Some(TickOutcome::GameOver { .. }) = game.advance(elapsed_ms) {
                info!(
                    "game over after {}s: score {}, lines {}",
                    game.elapsed_ms() / 1000,
                    game.score(),
                    game.lines()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_logger_without_log_file() {
        std::env::set_var("RUST_LOG", "debug");

        assert!(!init_logging_to(None));
        assert!(!init_logging_to(Some("   ".to_string())));
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }
}
