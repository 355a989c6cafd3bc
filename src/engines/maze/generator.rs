use crate::engines::maze::grid::Grid;
use crate::error::{GenmazeError, Result};
use crate::types::{Cell, Position};
use rand::Rng;

/// Smallest accepted side length
pub const MIN_DIMENSION: usize = 3;

/// Randomized frontier-growth maze carver (a Prim variant).
///
/// Room cells sit on odd coordinates strictly inside the border; the cells
/// between two rooms are connectors. Carving grows a spanning tree over the
/// rooms, so the result is a perfect maze: one simple path between any two
/// open cells.
///
/// ```
/// use genmaze::engines::maze::MazeGenerator;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let grid = MazeGenerator::new(7, 11).generate(&mut rng).unwrap();
/// assert_eq!(grid.rows(), 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
}

impl MazeGenerator {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Grid> {
        generate(self.rows, self.cols, rng)
    }

    /// Number of room cells a `rows x cols` maze carves
    pub fn room_count(rows: usize, cols: usize) -> usize {
        ((rows.saturating_sub(1)) / 2) * ((cols.saturating_sub(1)) / 2)
    }
}

/// Generate a `rows x cols` maze.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        return Err(GenmazeError::InvalidDimensions { rows, cols });
    }

    let mut grid = Grid::walled(rows, cols);

    let mut current = Position::new(
        1 + 2 * rng.gen_range(0..(rows - 1) / 2),
        1 + 2 * rng.gen_range(0..(cols - 1) / 2),
    );
    grid.set(current, Cell::Open);
    let mut frontier = vec![current];

    while !frontier.is_empty() {
        let neighbors = uncarved_rooms(&grid, current);

        if neighbors.is_empty() {
            if let Some(idx) = frontier.iter().position(|&p| p == current) {
                frontier.remove(idx);
            }
            if !frontier.is_empty() {
                current = frontier[rng.gen_range(0..frontier.len())];
            }
            continue;
        }

        let next = neighbors[rng.gen_range(0..neighbors.len())];
        let connector = Position::new((next.row + current.row) / 2, (next.col + current.col) / 2);
        grid.set(connector, Cell::Open);
        grid.set(next, Cell::Open);

        frontier.push(next);
        current = frontier[rng.gen_range(0..frontier.len())];
    }

    // End is written last so it wins when both share a cell
    grid.set(grid.start(), Cell::Start);
    grid.set(grid.end(), Cell::End);

    log::debug!(
        "Generated {}x{} maze with {} open cells",
        rows,
        cols,
        grid.passable_cells().count()
    );

    Ok(grid)
}

/// Room cells two steps away (up, down, left, right) that are still walls.
fn uncarved_rooms(grid: &Grid, from: Position) -> Vec<Position> {
    const DIRECTIONS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| {
            let row = from.row.checked_add_signed(dr)?;
            let col = from.col.checked_add_signed(dc)?;
            // Rooms never touch the last row/column, even on even dimensions
            if row == 0 || col == 0 || row + 1 >= grid.rows() || col + 1 >= grid.cols() {
                return None;
            }
            let pos = Position::new(row, col);
            (grid.cell(pos) == Some(Cell::Wall)).then_some(pos)
        })
        .collect()
}
