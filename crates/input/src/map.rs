//! Key bindings: crossterm key events to engine commands.
//!
//! Letter keys are case-insensitive. Arrows, vi keys (`hjkl`) and WASD all
//! drive the same four motions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Bindings for letter keys, matched after lowercasing.
const LETTER_BINDINGS: &[(char, Command)] = &[
    ('h', Command::MoveLeft),
    ('a', Command::MoveLeft),
    ('l', Command::MoveRight),
    ('d', Command::MoveRight),
    ('j', Command::SoftDrop),
    ('s', Command::SoftDrop),
    ('k', Command::RotateClockwise),
    ('w', Command::RotateClockwise),
    ('r', Command::Reset),
];

/// Command bound to `key`, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::RotateClockwise),
        KeyCode::Char(ch) => {
            let ch = ch.to_ascii_lowercase();
            LETTER_BINDINGS
                .iter()
                .find(|(bound, _)| *bound == ch)
                .map(|&(_, command)| command)
        }
        _ => None,
    }
}

/// `q`, `Esc` or Ctrl-C ends the program.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(ch) => ch.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
