use super::action::Direction;

/// Square toroidal grid addressed by linear cell index.
///
/// Cell `index` sits at `row = index / width`, `col = index % width`.
/// Every neighbour lookup wraps around the edges, so a valid index
/// always maps to another valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
}

impl Board {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells on the board
    pub fn capacity(&self) -> usize {
        self.width * self.width
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity()
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.width
    }

    pub fn col(&self, index: usize) -> usize {
        index % self.width
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Index of the cell one step away in `direction`, wrapping at edges
    pub fn neighbor(&self, index: usize, direction: Direction) -> usize {
        let w = self.width;
        let (row, col) = (self.row(index), self.col(index));

        let (row, col) = match direction {
            Direction::Up => ((row + w - 1) % w, col),
            Direction::Down => ((row + 1) % w, col),
            Direction::Left => (row, (col + w - 1) % w),
            Direction::Right => (row, (col + 1) % w),
        };

        self.index(row, col)
    }

    /// Direction that leads from `from` to the adjacent cell `to`, if any
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(from, d) == to)
    }

    /// Shortest per-axis distance between two cells on the torus
    pub fn toroidal_distance(&self, a: usize, b: usize) -> (usize, usize) {
        let axis = |x: usize, y: usize| {
            let d = x.abs_diff(y);
            d.min(self.width - d)
        };

        (
            axis(self.row(a), self.row(b)),
            axis(self.col(a), self.col(b)),
        )
    }
}
