use crate::engines::maze::grid::Grid;
use crate::error::{GenmazeError, Result};
use crate::types::Position;
use std::collections::{HashSet, VecDeque};

/// Shortest route from the maze entrance to its exit.
///
/// Read-only once computed; individuals only ask whether they stand on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
    members: HashSet<Position>,
}

impl Path {
    fn new(cells: Vec<Position>) -> Self {
        let members = cells.iter().copied().collect();
        Self { cells, members }
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    /// Number of cells, both ends included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Breadth-first search over passable cells.
///
/// Neighbours are expanded right, down, left, up, so equal-length
/// alternatives always resolve the same way.
pub fn shortest_path(grid: &Grid, start: Position, end: Position) -> Result<Path> {
    let not_found = || GenmazeError::NoPathFound { start, end };
    if !grid.is_passable(start) || !grid.is_passable(end) {
        return Err(not_found());
    }

    let index = |p: Position| p.row * grid.cols() + p.col;
    let mut parent: Vec<Option<Position>> = vec![None; grid.rows() * grid.cols()];
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([start]);
    visited[index(start)] = true;

    while let Some(current) = queue.pop_front() {
        if current == end {
            let mut cells = vec![end];
            let mut cursor = end;
            while let Some(prev) = parent[index(cursor)] {
                cells.push(prev);
                cursor = prev;
            }
            cells.reverse();
            log::debug!("Shortest path {} -> {}: {} steps", start, end, cells.len() - 1);
            return Ok(Path::new(cells));
        }

        for next in grid.open_neighbors(current) {
            if !visited[index(next)] {
                visited[index(next)] = true;
                parent[index(next)] = Some(current);
                queue.push_back(next);
            }
        }
    }

    Err(not_found())
}

/// BFS distance from `start` to every cell, row-major; `None` for walls and
/// unreachable cells.
pub fn distances_from(grid: &Grid, start: Position) -> Vec<Option<usize>> {
    let index = |p: Position| p.row * grid.cols() + p.col;
    let mut distances = vec![None; grid.rows() * grid.cols()];
    if !grid.is_passable(start) {
        return distances;
    }

    distances[index(start)] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = distances[index(current)].unwrap_or(0);
        for next in grid.open_neighbors(current) {
            if distances[index(next)].is_none() {
                distances[index(next)] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}
