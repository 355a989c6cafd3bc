use crate::engines::generation::genome::Genome;
use crate::engines::generation::operators::random_genome;
use crate::engines::maze::{Grid, Path};
use crate::types::{Move, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Score added for each move that bumps into a wall or the border
pub const COLLISION_PENALTY: u32 = 2;
/// Score added when an individual ends its walk off the reference path
pub const OFF_PATH_PENALTY: u32 = 15;

/// How an exhausted individual is scored. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FitnessPolicy {
    /// Off-path penalty plus Manhattan distance to the goal
    #[default]
    PathGuided,
    /// Collision penalties gathered while walking plus Manhattan distance
    CollisionPenalty,
}

/// Result of a single `Individual::step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved(Position),
    Blocked,
    Exhausted,
}

/// One maze walker: a fixed move list and where it currently stands.
#[derive(Debug, Clone)]
pub struct Individual {
    id: usize,
    start: Position,
    position: Position,
    moves: Genome,
    cursor: usize,
    collision_penalty: u32,
    fitness: Option<u32>,
    reached_end: bool,
}

impl Individual {
    pub fn new(id: usize, start: Position, moves: Genome) -> Self {
        Self {
            id,
            start,
            position: start,
            moves,
            cursor: 0,
            collision_penalty: 0,
            fitness: None,
            reached_end: false,
        }
    }

    pub fn random<R: Rng>(id: usize, start: Position, max_moves: usize, rng: &mut R) -> Self {
        Self::new(id, start, random_genome(max_moves, rng))
    }

    /// Identity, also used to pick a display colour
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn collision_penalty(&self) -> u32 {
        self.collision_penalty
    }

    pub fn fitness_score(&self) -> Option<u32> {
        self.fitness
    }

    pub fn has_reached_end(&self) -> bool {
        self.reached_end
    }

    pub fn has_moves_left(&self) -> bool {
        self.cursor < self.moves.len()
    }

    /// Play the next move against `grid`.
    ///
    /// Blocked moves leave the walker in place and cost `COLLISION_PENALTY`;
    /// the cursor moves on either way.
    pub fn step(&mut self, grid: &Grid) -> StepOutcome {
        let Some(&next_move) = self.moves.get(self.cursor) else {
            return StepOutcome::Exhausted;
        };
        self.cursor += 1;

        let outcome = match next_move.apply(self.position, grid.rows(), grid.cols()) {
            Some(dest) if grid.is_passable(dest) => {
                self.position = dest;
                StepOutcome::Moved(dest)
            }
            _ => {
                self.collision_penalty += COLLISION_PENALTY;
                StepOutcome::Blocked
            }
        };

        if self.position == grid.end() {
            self.reached_end = true;
        }
        outcome
    }

    /// Recompute and store the fitness score from the final position.
    pub fn fitness(&mut self, path: &Path, goal: Position, policy: FitnessPolicy) -> u32 {
        let score = score_position(self.position, path, goal, policy, self.collision_penalty);
        self.fitness = Some(score);
        score
    }
}

/// Fitness of standing at `position`; `collisions` only counts under
/// `FitnessPolicy::CollisionPenalty`.
pub fn score_position(
    position: Position,
    path: &Path,
    goal: Position,
    policy: FitnessPolicy,
    collisions: u32,
) -> u32 {
    let base = match policy {
        FitnessPolicy::PathGuided if path.contains(position) => 0,
        FitnessPolicy::PathGuided => OFF_PATH_PENALTY,
        FitnessPolicy::CollisionPenalty => collisions,
    };
    let distance = u32::try_from(position.manhattan(goal)).unwrap_or(u32::MAX);
    base.saturating_add(distance)
}
