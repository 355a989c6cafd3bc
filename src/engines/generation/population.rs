use crate::engines::generation::{
    genome::{Genome, MutationRate},
    hall_of_fame::{EliteWalker, HallOfFame},
    individual::{FitnessPolicy, Individual},
    operators,
};
use crate::engines::maze::{Grid, Path};
use crate::error::{GenmazeError, Result};
use crate::types::{Move, Position};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;

/// Number of children bred at every generation boundary
pub const CHILDREN_PER_GENERATION: usize = 5;

pub struct PopulationParams {
    pub size: usize,
    pub max_moves: usize,
    pub mutation_rate: MutationRate,
    pub parent_count: usize,
    pub fitness_policy: FitnessPolicy,
    pub hall_of_fame_size: usize,
}

/// Where the current generation is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationPhase {
    Stepping,
    AllDone,
    Evaluated,
    Terminated,
}

/// What a single tick did to the population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub all_done: bool,
    pub solved_by: Option<usize>,
}

/// Outcome of a breeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationAdvance {
    Advanced { generation: usize },
    Skipped { available: usize },
}

/// Summary of one finished generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    pub best_fitness: u32,
    pub mean_fitness: f64,
    pub best_so_far: u32,
    pub best_individual: usize,
    pub advanced: bool,
}

/// A cohort of walkers sharing one maze.
///
/// The population owns its individuals outright and swaps the whole cohort
/// at each generation boundary. All randomness comes from its own `StdRng`.
pub struct Population {
    individuals: Vec<Individual>,
    parents: Vec<Individual>,
    start: Position,
    goal: Position,
    max_moves: usize,
    mutation_rate: MutationRate,
    parent_count: usize,
    fitness_policy: FitnessPolicy,
    grid: Arc<Grid>,
    path: Arc<Path>,
    generation: usize,
    phase: GenerationPhase,
    hall_of_fame: HallOfFame,
    rng: StdRng,
}

impl Population {
    pub fn new(params: PopulationParams, grid: Arc<Grid>, path: Arc<Path>, mut rng: StdRng) -> Self {
        let start = grid.start();
        info!(
            "Initializing population of size {} with {} moves each",
            params.size, params.max_moves
        );
        let individuals = (0..params.size)
            .map(|id| Individual::random(id, start, params.max_moves, &mut rng))
            .collect();

        Self {
            individuals,
            parents: Vec::new(),
            start,
            goal: grid.end(),
            max_moves: params.max_moves,
            mutation_rate: params.mutation_rate,
            parent_count: params.parent_count,
            fitness_policy: params.fitness_policy,
            grid,
            path,
            generation: 0,
            phase: GenerationPhase::Stepping,
            hall_of_fame: HallOfFame::new(params.hall_of_fame_size),
            rng,
        }
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn parents(&self) -> &[Individual] {
        &self.parents
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Advance every individual by one move, in population order.
    pub fn step_all(&mut self) -> TickSummary {
        if self.phase == GenerationPhase::Terminated {
            return TickSummary {
                all_done: true,
                solved_by: self.first_finisher(),
            };
        }

        for individual in &mut self.individuals {
            individual.step(&self.grid);
        }

        let solved_by = self.first_finisher();
        let all_done = self.individuals.iter().all(|i| !i.has_moves_left());

        if let Some(id) = solved_by {
            info!("Individual {} reached the exit in generation {}", id, self.generation);
            self.phase = GenerationPhase::Terminated;
        } else if all_done {
            self.phase = GenerationPhase::AllDone;
        }

        TickSummary { all_done, solved_by }
    }

    fn first_finisher(&self) -> Option<usize> {
        self.individuals
            .iter()
            .find(|i| i.has_reached_end())
            .map(Individual::id)
    }

    /// Score every individual from its current position.
    pub fn evaluate(&mut self) {
        for individual in &mut self.individuals {
            individual.fitness(&self.path, self.goal, self.fitness_policy);
        }
        if self.phase != GenerationPhase::Terminated {
            self.phase = GenerationPhase::Evaluated;
        }
    }

    /// Keep the `n` fittest individuals as breeding parents.
    pub fn select_best(&mut self, n: usize) -> &[Individual] {
        let scores: Vec<Option<u32>> = self.individuals.iter().map(Individual::fitness_score).collect();
        self.parents = operators::rank_ascending(&scores, n)
            .into_iter()
            .map(|i| self.individuals[i].clone())
            .collect();
        &self.parents
    }

    pub fn crossover(&mut self, parent1: &[Move], parent2: &[Move]) -> Genome {
        operators::crossover(parent1, parent2, &mut self.rng)
    }

    pub fn mutate(&mut self, mut genome: Genome) -> Genome {
        operators::mutate(&mut genome, self.mutation_rate, &mut self.rng);
        genome
    }

    fn breeding_pair(&self) -> Result<(Genome, Genome)> {
        match self.parents.as_slice() {
            [a, b, ..] => Ok((a.moves().to_vec(), b.moves().to_vec())),
            other => Err(GenmazeError::InsufficientParents { available: other.len() }),
        }
    }

    /// Replace the cohort with five children of the two selected parents.
    ///
    /// Without two parents nothing changes and the generation index stays.
    pub fn generate_next_generation(&mut self) -> GenerationAdvance {
        let (a, b) = match self.breeding_pair() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("Generation {} not advanced: {}", self.generation, e);
                return GenerationAdvance::Skipped { available: self.parents.len() };
            }
        };

        let clone_a = self.mutate(a.clone());
        let clone_b = self.mutate(b.clone());
        let cross_ab = self.crossover(&a, &b);
        let cross_ab = self.mutate(cross_ab);
        let cross_ba = self.crossover(&b, &a);
        let cross_ba = self.mutate(cross_ba);
        let mixed = operators::uniform_mix(&a, &b, &mut self.rng);
        let mixed = self.mutate(mixed);

        self.individuals = [clone_a, clone_b, cross_ab, cross_ba, mixed]
            .into_iter()
            .enumerate()
            .map(|(id, moves)| Individual::new(id, self.start, moves))
            .collect();
        debug_assert_eq!(self.individuals.len(), CHILDREN_PER_GENERATION);

        self.generation += 1;
        self.phase = GenerationPhase::Stepping;
        GenerationAdvance::Advanced { generation: self.generation }
    }

    /// Close the current generation: evaluate, select, record and breed.
    pub fn advance_generation(&mut self) -> GenerationReport {
        let finished = self.generation;
        self.evaluate();

        let scores: Vec<u32> = self
            .individuals
            .iter()
            .filter_map(Individual::fitness_score)
            .collect();
        let mean_fitness = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
        };

        let best = self.select_best(self.parent_count).first().cloned();
        let (best_fitness, best_individual) = match &best {
            Some(b) => (b.fitness_score().unwrap_or(u32::MAX), b.id()),
            None => (u32::MAX, 0),
        };

        if let Some(best) = best {
            self.hall_of_fame.try_add(EliteWalker {
                genome: best.moves().to_vec(),
                fitness: best_fitness,
                generation: finished,
                final_position: best.position(),
            });
        }
        let best_so_far = self.hall_of_fame.best().map_or(best_fitness, |w| w.fitness);

        let advanced = matches!(
            self.generate_next_generation(),
            GenerationAdvance::Advanced { .. }
        );

        debug!(
            "Gen {}: best={} mean={:.2} best_so_far={} advanced={}",
            finished, best_fitness, mean_fitness, best_so_far, advanced
        );

        GenerationReport {
            generation: finished,
            best_fitness,
            mean_fitness,
            best_so_far,
            best_individual,
            advanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::maze::shortest_path;
    use rand::SeedableRng;

    fn setup(size: usize, max_moves: usize, seed: u64) -> Population {
        let grid = Grid::from_ascii(
            "\
#########
#S      #
####### #
#E      #
#########",
        )
        .unwrap();
        let path = shortest_path(&grid, grid.start(), grid.end()).unwrap();
        Population::new(
            PopulationParams {
                size,
                max_moves,
                mutation_rate: MutationRate::new(0.2).unwrap(),
                parent_count: 2,
                fitness_policy: FitnessPolicy::PathGuided,
                hall_of_fame_size: 3,
            },
            Arc::new(grid),
            Arc::new(path),
            StdRng::seed_from_u64(seed),
        )
    }

    fn run_out(population: &mut Population) -> TickSummary {
        loop {
            let summary = population.step_all();
            if summary.all_done || summary.solved_by.is_some() {
                return summary;
            }
        }
    }

    #[test]
    fn test_initial_population() {
        let population = setup(7, 12, 1);
        assert_eq!(population.individuals().len(), 7);
        assert_eq!(population.generation(), 0);
        assert_eq!(population.phase(), GenerationPhase::Stepping);
        for (id, ind) in population.individuals().iter().enumerate() {
            assert_eq!(ind.id(), id);
            assert_eq!(ind.moves().len(), 12);
            assert_eq!(ind.position(), Position::new(1, 1));
        }
    }

    #[test]
    fn test_select_best_orders_by_fitness() {
        let mut population = setup(6, 4, 2);
        run_out(&mut population);
        population.evaluate();
        assert_eq!(population.phase(), GenerationPhase::Evaluated);

        let mut sorted: Vec<u32> = population
            .individuals()
            .iter()
            .filter_map(Individual::fitness_score)
            .collect();
        sorted.sort_unstable();

        let parents = population.select_best(2);
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].fitness_score(), Some(sorted[0]));
        assert_eq!(parents[1].fitness_score(), Some(sorted[1]));
    }

    #[test]
    fn test_next_generation_shape() {
        let mut population = setup(8, 10, 3);
        run_out(&mut population);
        let report = population.advance_generation();

        assert!(report.advanced);
        assert_eq!(report.generation, 0);
        assert_eq!(population.generation(), 1);
        assert_eq!(population.phase(), GenerationPhase::Stepping);
        assert_eq!(population.individuals().len(), CHILDREN_PER_GENERATION);
        for (id, child) in population.individuals().iter().enumerate() {
            assert_eq!(child.id(), id);
            assert_eq!(child.cursor(), 0);
            assert_eq!(child.fitness_score(), None);
            assert!(!child.has_reached_end());
            assert_eq!(child.position(), Position::new(1, 1));
            assert_eq!(child.moves().len(), 10);
        }
    }

    #[test]
    fn test_children_without_mutation_come_from_parents() {
        let mut population = setup(4, 16, 4);
        population.mutation_rate = MutationRate::NEVER;
        run_out(&mut population);
        population.evaluate();
        population.select_best(2);
        let a = population.parents()[0].moves().to_vec();
        let b = population.parents()[1].moves().to_vec();

        population.generate_next_generation();
        let children = population.individuals();
        assert_eq!(children[0].moves(), a.as_slice());
        assert_eq!(children[1].moves(), b.as_slice());
        for child in &children[2..] {
            for (i, m) in child.moves().iter().enumerate() {
                assert!(*m == a[i] || *m == b[i]);
            }
        }
    }

    #[test]
    fn test_insufficient_parents_is_noop() {
        let mut population = setup(3, 5, 5);
        run_out(&mut population);
        population.evaluate();
        population.select_best(1);
        let before: Vec<Vec<Move>> = population.individuals().iter().map(|i| i.moves().to_vec()).collect();

        assert_eq!(
            population.generate_next_generation(),
            GenerationAdvance::Skipped { available: 1 }
        );
        assert_eq!(population.generation(), 0);
        let after: Vec<Vec<Move>> = population.individuals().iter().map(|i| i.moves().to_vec()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_solved_population_terminates() {
        let mut population = setup(2, 14, 6);
        let mut moves = vec![Move::Right; 6];
        moves.extend([Move::Down, Move::Down]);
        moves.extend(vec![Move::Left; 6]);
        population.individuals[1] = Individual::new(1, Position::new(1, 1), moves);

        let summary = run_out(&mut population);
        assert_eq!(summary.solved_by, Some(1));
        assert_eq!(population.phase(), GenerationPhase::Terminated);
        // Further ticks do nothing
        let cursor = population.individuals()[0].cursor();
        population.step_all();
        assert_eq!(population.individuals()[0].cursor(), cursor);
    }

    #[test]
    fn test_best_so_far_never_increases() {
        let mut population = setup(5, 20, 7);
        let mut previous = u32::MAX;
        for _ in 0..30 {
            let summary = run_out(&mut population);
            if summary.solved_by.is_some() {
                break;
            }
            let report = population.advance_generation();
            assert!(report.best_so_far <= previous);
            assert!(report.best_so_far <= report.best_fitness);
            previous = report.best_so_far;
        }
    }
}
