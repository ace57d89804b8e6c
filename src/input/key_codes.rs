//! Numeric key codes as reported by browser keyboard events

use crate::game::Direction;

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Direction bound to a key code. Only the arrow keys are mapped; any other
/// code returns `None` and the key press should be ignored.
pub const fn direction_for_key_code(code: u32) -> Option<Direction> {
    match code {
        KEY_LEFT => Some(Direction::Left),
        KEY_UP => Some(Direction::Up),
        KEY_RIGHT => Some(Direction::Right),
        KEY_DOWN => Some(Direction::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_key_codes() {
        assert_eq!(direction_for_key_code(37), Some(Direction::Left));
        assert_eq!(direction_for_key_code(38), Some(Direction::Up));
        assert_eq!(direction_for_key_code(39), Some(Direction::Right));
        assert_eq!(direction_for_key_code(40), Some(Direction::Down));
    }

    #[test]
    fn test_unmapped_codes() {
        for code in [0, 13, 32, 36, 41, 65, 87] {
            assert_eq!(direction_for_key_code(code), None);
        }
    }

    #[test]
    fn test_every_direction_has_a_key() {
        for direction in Direction::ALL {
            assert!((KEY_LEFT..=KEY_DOWN).any(|code| direction_for_key_code(code) == Some(direction)));
        }
    }
}
