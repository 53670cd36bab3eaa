use thiserror::Error;

use super::action::Direction;

/// Errors raised when a world cannot be built from the given parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("board width {width} is too small, need at least 2")]
    WidthTooSmall { width: usize },
    #[error("cell index {index} is outside a board of {capacity} cells")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("win length {win_length} must lie between 2 and {capacity}")]
    InvalidWinLength { win_length: usize, capacity: usize },
    #[error("snake body of {length} segments already reaches the win length {win_length}")]
    BodyTooLong { length: usize, win_length: usize },
    #[error("snake body must contain at least one segment")]
    EmptyBody,
    #[error("cell {index} appears more than once in the snake body")]
    DuplicateCell { index: usize },
    #[error("segment {position} at cell {index} is not adjacent to the segment before it")]
    DetachedSegment { position: usize, index: usize },
    #[error("reward cell {index} lies on the snake")]
    RewardOnSnake { index: usize },
    #[error("heading {heading:?} points back into the neck")]
    ReversedHeading { heading: Direction },
}
