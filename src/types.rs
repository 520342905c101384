//! Type definitions shared across the maze, the session and the interface.

use ratatui::crossterm::event::KeyCode;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. This is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Maze navigation screen.
    ///
    /// This variant represents the screen where the player walks the maze towards the goal.
    Maze,
    /// Proposal prompt screen.
    ///
    /// This variant represents the popup shown over the solved maze, asking the question with a
    /// "Yes" and a rather shy "No" button.
    Proposal,
    /// Celebration screen.
    ///
    /// This variant represents the screen shown once the question has been answered, with the
    /// confetti burst playing over it.
    Celebration,
}

/// Axis-aligned movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Maps a key press onto a direction.
    ///
    /// Arrow keys and the lowercase `w`, `a`, `s` and `d` letters are recognized. Any other key
    /// yields `None`.
    pub(crate) const fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('w') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('s') => Some(Self::Down),
            KeyCode::Left | KeyCode::Char('a') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('d') => Some(Self::Right),
            _ => None,
        }
    }

    /// Row and column delta of a single step in this direction.
    const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// Row and column coordinates of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    /// Zero-based row index.
    pub(crate) row: usize,
    /// Zero-based column index.
    pub(crate) col: usize,
}

impl Position {
    /// Builds a position from its row and column.
    pub(crate) const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `distance` steps away in `direction`.
    ///
    /// Yields `None` when the result would fall below row or column zero. The upper bound is left
    /// to the grid lookup.
    pub(crate) const fn offset(self, direction: Direction, distance: isize) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();

        let Some(row) = self.row.checked_add_signed(row_delta * distance) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(col_delta * distance) else {
            return None;
        };

        Some(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_arrow_keys() {
        assert_eq!(Direction::from_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_direction_from_letter_keys() {
        assert_eq!(Direction::from_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Char('d')), Some(Direction::Right));
    }

    #[test]
    fn test_direction_ignores_other_keys() {
        assert_eq!(Direction::from_key(KeyCode::Char('W')), None);
        assert_eq!(Direction::from_key(KeyCode::Char('x')), None);
        assert_eq!(Direction::from_key(KeyCode::Enter), None);
        assert_eq!(Direction::from_key(KeyCode::Esc), None);
    }

    #[test]
    fn test_position_offset() {
        let origin = Position::new(3, 3);

        assert_eq!(origin.offset(Direction::Up, 1), Some(Position::new(2, 3)));
        assert_eq!(origin.offset(Direction::Down, 2), Some(Position::new(5, 3)));
        assert_eq!(origin.offset(Direction::Left, 2), Some(Position::new(3, 1)));
        assert_eq!(origin.offset(Direction::Right, 1), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_position_offset_below_zero() {
        let corner = Position::new(0, 1);

        assert_eq!(corner.offset(Direction::Up, 1), None);
        assert_eq!(corner.offset(Direction::Left, 2), None);
        assert_eq!(corner.offset(Direction::Left, 1), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_screen_variants() {
        assert_ne!(Screen::Maze, Screen::Proposal);
        assert_ne!(Screen::Proposal, Screen::Celebration);
        assert_eq!(format!("{:?}", Screen::Celebration), "Celebration");
    }
}
