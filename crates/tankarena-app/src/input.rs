//! Key and console input mapping.
//!
//! Key codes follow X11 keysyms for the arrow keys and plain character
//! codes for everything else.

use tankarena_core::commands::PlayerCommand;
use tankarena_core::enums::{Direction, SessionState};

pub const KEY_UP: u32 = 65362;
pub const KEY_DOWN: u32 = 65364;
pub const KEY_LEFT: u32 = 65361;
pub const KEY_RIGHT: u32 = 65363;
pub const KEY_SPACE: u32 = ' ' as u32;
pub const KEY_PAUSE: u32 = 'p' as u32;
pub const KEY_PAUSE_UPPER: u32 = 'P' as u32;

/// Command bound to a key, if any.
pub fn map_key(code: u32) -> Option<PlayerCommand> {
    let direction = match code {
        KEY_UP => Direction::Up,
        KEY_DOWN => Direction::Down,
        KEY_LEFT => Direction::Left,
        KEY_RIGHT => Direction::Right,
        KEY_SPACE => return Some(PlayerCommand::Fire),
        KEY_PAUSE | KEY_PAUSE_UPPER => return Some(PlayerCommand::TogglePause),
        _ => return None,
    };
    Some(PlayerCommand::Move { direction })
}

/// Key handling as the session sees it: every key is ignored once the game
/// is over.
pub fn key_command(state: SessionState, code: u32) -> Option<PlayerCommand> {
    match state {
        SessionState::GameOver => None,
        SessionState::Playing | SessionState::Paused => map_key(code),
    }
}

/// One word typed on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    /// A key press to run through the key mapping.
    Key(u32),
    Reset,
    Status,
    Quit,
}

/// Parse a console word. Case-insensitive; unknown words yield `None`.
pub fn parse_word(word: &str) -> Option<ConsoleInput> {
    let input = match word.to_ascii_lowercase().as_str() {
        "up" | "w" => ConsoleInput::Key(KEY_UP),
        "down" | "s" => ConsoleInput::Key(KEY_DOWN),
        "left" | "a" => ConsoleInput::Key(KEY_LEFT),
        "right" | "d" => ConsoleInput::Key(KEY_RIGHT),
        "fire" | "f" => ConsoleInput::Key(KEY_SPACE),
        "pause" | "p" => ConsoleInput::Key(KEY_PAUSE),
        "reset" | "r" => ConsoleInput::Reset,
        "status" => ConsoleInput::Status,
        "quit" | "q" | "exit" => ConsoleInput::Quit,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move() {
        let cases = [
            (KEY_UP, Direction::Up),
            (KEY_DOWN, Direction::Down),
            (KEY_LEFT, Direction::Left),
            (KEY_RIGHT, Direction::Right),
        ];
        for (code, direction) in cases {
            assert_eq!(map_key(code), Some(PlayerCommand::Move { direction }));
        }
    }

    #[test]
    fn test_fire_and_pause_keys() {
        assert_eq!(map_key(32), Some(PlayerCommand::Fire));
        assert_eq!(map_key('p' as u32), Some(PlayerCommand::TogglePause));
        assert_eq!(map_key('P' as u32), Some(PlayerCommand::TogglePause));
        assert_eq!(map_key('x' as u32), None);
        assert_eq!(map_key(0), None);
    }

    #[test]
    fn test_keys_ignored_after_game_over() {
        assert_eq!(key_command(SessionState::GameOver, KEY_SPACE), None);
        assert_eq!(key_command(SessionState::GameOver, KEY_PAUSE), None);
        assert_eq!(
            key_command(SessionState::Paused, KEY_PAUSE),
            Some(PlayerCommand::TogglePause)
        );
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_word("UP"), Some(ConsoleInput::Key(KEY_UP)));
        assert_eq!(parse_word("fire"), Some(ConsoleInput::Key(KEY_SPACE)));
        assert_eq!(parse_word("reset"), Some(ConsoleInput::Reset));
        assert_eq!(parse_word("status"), Some(ConsoleInput::Status));
        assert_eq!(parse_word("q"), Some(ConsoleInput::Quit));
        assert_eq!(parse_word("jump"), None);
    }
}
