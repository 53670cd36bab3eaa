use serde::{Deserialize, Serialize};

/// Heading of the snake on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Decode the compact numbering used by foreign callers (0 = Up, clockwise)
    pub fn from_code(code: u8) -> Option<Direction> {
        Self::ALL.get(code as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Direction::from_code(0), Some(Direction::Up));
        assert_eq!(Direction::from_code(1), Some(Direction::Right));
        assert_eq!(Direction::from_code(2), Some(Direction::Down));
        assert_eq!(Direction::from_code(3), Some(Direction::Left));
        assert_eq!(Direction::from_code(4), None);
    }
}
