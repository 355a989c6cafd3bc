use crate::engines::generation::Individual;
use crate::engines::maze::Grid;
use crate::types::Position;

/// Text form of `grid`; `Grid::from_ascii` reads it back.
pub fn render_grid(grid: &Grid) -> String {
    render(grid, &[])
}

/// Text form of `grid` with each individual drawn as the last digit of its id.
/// Later individuals are drawn over earlier ones sharing a cell.
pub fn render(grid: &Grid, individuals: &[Individual]) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        for (col, cell) in grid.row_cells(row).unwrap_or_default().iter().enumerate() {
            let here = Position::new(row, col);
            let walker = individuals.iter().rev().find(|i| i.position() == here);
            match walker.and_then(|w| char::from_digit((w.id() % 10) as u32, 10)) {
                Some(digit) => out.push(digit),
                None => out.push(cell.symbol()),
            }
        }
        out.push('\n');
    }
    out
}
