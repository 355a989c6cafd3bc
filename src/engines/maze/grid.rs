use crate::error::{GenmazeError, Result};
use crate::types::{Cell, Position};

/// Rectangular maze grid, stored row-major.
///
/// The grid remembers where its entrance and exit are, so the two stay
/// addressable even when they share a cell (3x3 mazes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl Grid {
    /// All-wall grid with the conventional entrance/exit positions.
    pub(crate) fn walled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Wall; rows * cols],
            start: Position::new(1, 1),
            end: Position::new(rows.saturating_sub(2), cols.saturating_sub(2)),
        }
    }

    /// Parse the text form produced by `ui::ascii::render_grid`.
    ///
    /// `#` is a wall, space or `.` is open, `S` and `E` mark the entrance and
    /// exit. Every line must have the same width and both markers must appear
    /// exactly once.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GenmazeError::MalformedGrid("empty grid".to_string()));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GenmazeError::MalformedGrid(format!(
                    "row {} has width {}, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    GenmazeError::MalformedGrid(format!(
                        "unknown symbol {:?} at ({}, {})",
                        symbol, row, col
                    ))
                })?;
                let slot = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::End => Some(&mut end),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.replace(Position::new(row, col)).is_some() {
                        return Err(GenmazeError::MalformedGrid(format!(
                            "duplicate {:?} marker at ({}, {})",
                            cell, row, col
                        )));
                    }
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or_else(|| GenmazeError::MalformedGrid("missing start".to_string()))?;
        let end = end.ok_or_else(|| GenmazeError::MalformedGrid("missing end".to_string()))?;

        Ok(Self { rows, cols, cells, start, end })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// In bounds and not a wall
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| !c.is_wall())
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let idx = pos.row * self.cols + pos.col;
        self.cells[idx] = cell;
    }

    /// Passable 4-neighbours in right, down, left, up order.
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.is_passable(next).then_some(next)
        })
    }

    /// Every non-wall position, row-major
    pub fn passable_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            (!cell.is_wall()).then(|| Position::new(idx / self.cols, idx % self.cols))
        })
    }

    /// Cells of `row`, or `None` past the last row
    pub fn row_cells(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }
}
