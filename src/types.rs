use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
    Start, // Entrance, always (1, 1)
    End,   // Exit, always (rows - 2, cols - 2)
}

impl Cell {
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Character used by the text renderer and `Grid::from_ascii`
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' | '.' => Some(Cell::Open),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            _ => None,
        }
    }
}

/// Grid coordinate, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// `(x, y)` screen ordering used by renderers
    pub fn as_xy(self) -> (usize, usize) {
        (self.col, self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// One gene of an individual's move sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,    // row - 1
    Down,  // row + 1
    Left,  // col - 1
    Right, // col + 1
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Destination of this move from `from`, or `None` if it would leave a
    /// `rows x cols` grid.
    pub fn apply(self, from: Position, rows: usize, cols: usize) -> Option<Position> {
        let Position { row, col } = from;
        match self {
            Move::Up if row > 0 => Some(Position::new(row - 1, col)),
            Move::Down if row + 1 < rows => Some(Position::new(row + 1, col)),
            Move::Left if col > 0 => Some(Position::new(row, col - 1)),
            Move::Right if col + 1 < cols => Some(Position::new(row, col + 1)),
            _ => None,
        }
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_apply_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(Move::Up.apply(corner, 3, 3), None);
        assert_eq!(Move::Left.apply(corner, 3, 3), None);
        assert_eq!(Move::Down.apply(corner, 3, 3), Some(Position::new(1, 0)));
        assert_eq!(Move::Right.apply(corner, 3, 3), Some(Position::new(0, 1)));

        let far = Position::new(2, 2);
        assert_eq!(Move::Down.apply(far, 3, 3), None);
        assert_eq!(Move::Right.apply(far, 3, 3), None);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(1, 1).manhattan(Position::new(5, 9)), 12);
        assert_eq!(Position::new(5, 9).manhattan(Position::new(1, 1)), 12);
        assert!(Position::new(2, 3).is_adjacent(Position::new(2, 4)));
        assert!(!Position::new(2, 3).is_adjacent(Position::new(3, 4)));
    }

    #[test]
    fn test_symbols_round_trip() {
        for cell in [Cell::Wall, Cell::Open, Cell::Start, Cell::End] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }
}
