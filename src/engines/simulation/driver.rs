use crate::config::AppConfig;
use crate::engines::generation::{GenerationReport, Population, PopulationParams};
use crate::engines::maze::{shortest_path, Grid, MazeGenerator, Path};
use crate::error::Result;
use crate::types::Position;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub trait ProgressCallback: Send {
    fn on_generation_complete(&mut self, report: &GenerationReport);
    fn on_solved(&mut self, generation: usize, individual: usize, ticks: u64);
}

/// Where a run stands between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Running,
    Solved { generation: usize, individual: usize },
    GenerationLimit { generations: usize },
    Stopped,
}

/// What one call to `Simulation::tick` did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Running,
    GenerationAdvanced(GenerationReport),
    Solved { generation: usize, individual: usize, position: Position },
    Finished(RunStatus),
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub seed: Option<u64>,
    pub rows: usize,
    pub cols: usize,
    pub path_steps: usize,
    pub generations: usize,
    pub ticks: u64,
    pub status: RunStatus,
    pub solved: bool,
    pub winner: Option<usize>,
    pub best_fitness: Option<u32>,
    pub finished_at: String,
}

/// Thin tick-driven orchestrator around one maze and its population.
///
/// Nothing here schedules itself; call `tick` from whatever timer or event
/// loop drives the run, or use `run` / `run_paced`.
pub struct Simulation {
    grid: Arc<Grid>,
    path: Arc<Path>,
    population: Population,
    seed: Option<u64>,
    max_generations: Option<usize>,
    status: RunStatus,
    ticks: u64,
}

impl Simulation {
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.simulation.seed;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let grid = MazeGenerator::new(config.maze.rows, config.maze.cols).generate(&mut rng)?;
        let path = shortest_path(&grid, grid.start(), grid.end())?;
        info!(
            "Maze {}x{} ready, shortest path {} steps",
            grid.rows(),
            grid.cols(),
            path.steps()
        );

        let grid = Arc::new(grid);
        let path = Arc::new(path);
        let params = PopulationParams {
            size: config.evolution.population_size,
            max_moves: config.max_moves(),
            mutation_rate: config.evolution.mutation_rate()?,
            parent_count: config.evolution.parent_count,
            fitness_policy: config.evolution.fitness_policy,
            hall_of_fame_size: config.evolution.hall_of_fame_size,
        };
        let population_rng = StdRng::seed_from_u64(rng.gen());
        let population = Population::new(params, Arc::clone(&grid), Arc::clone(&path), population_rng);

        Ok(Self {
            grid,
            path,
            population,
            seed,
            max_generations: config.evolution.max_generations,
            status: RunStatus::Running,
            ticks: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_finished(&self) -> bool {
        self.status != RunStatus::Running
    }

    /// Step every individual once; breed when the whole cohort is spent.
    pub fn tick<C: ProgressCallback + ?Sized>(&mut self, callback: &mut C) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Finished(self.status);
        }
        self.ticks += 1;

        let summary = self.population.step_all();

        if let Some(individual) = summary.solved_by {
            let generation = self.population.generation();
            self.population.evaluate();
            self.status = RunStatus::Solved { generation, individual };
            callback.on_solved(generation, individual, self.ticks);
            let position = self.population.individuals()[individual].position();
            return TickOutcome::Solved { generation, individual, position };
        }

        if !summary.all_done {
            return TickOutcome::Running;
        }

        let report = self.population.advance_generation();
        callback.on_generation_complete(&report);

        if let Some(limit) = self.max_generations {
            if report.generation + 1 >= limit {
                info!("Generation limit {} reached without a solution", limit);
                self.status = RunStatus::GenerationLimit { generations: limit };
            }
        }
        TickOutcome::GenerationAdvanced(report)
    }

    /// Tick until solved or out of generations.
    pub fn run<C: ProgressCallback + ?Sized>(&mut self, callback: &mut C) -> RunReport {
        while !self.is_finished() {
            self.tick(callback);
        }
        self.report()
    }

    /// Tick every `interval`, checking `stop` between ticks.
    pub fn run_paced<C: ProgressCallback + ?Sized>(
        &mut self,
        interval: Duration,
        stop: &AtomicBool,
        callback: &mut C,
    ) -> RunReport {
        while !self.is_finished() {
            if stop.load(Ordering::Relaxed) {
                debug!("Stop requested after {} ticks", self.ticks);
                self.status = RunStatus::Stopped;
                break;
            }
            self.tick(callback);
            if !interval.is_zero() && !self.is_finished() {
                std::thread::sleep(interval);
            }
        }
        self.report()
    }

    pub fn report(&self) -> RunReport {
        let winner = match self.status {
            RunStatus::Solved { individual, .. } => Some(individual),
            _ => None,
        };
        let best_fitness = self
            .population
            .hall_of_fame()
            .best()
            .map(|w| w.fitness)
            .into_iter()
            .chain(self.population.individuals().iter().filter_map(|i| i.fitness_score()))
            .min();

        RunReport {
            seed: self.seed,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            path_steps: self.path.steps(),
            generations: self.population.generation(),
            ticks: self.ticks,
            status: self.status,
            solved: winner.is_some(),
            winner,
            best_fitness,
            finished_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::simulation::SilentProgressCallback;

    fn config(seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(seed);
        config.evolution.population_size = 5;
        config.evolution.max_generations = Some(3);
        config
    }

    #[test]
    fn test_generation_limit_stops_run() {
        let mut sim = Simulation::new(&config(8)).unwrap();
        let report = sim.run(&mut SilentProgressCallback);
        assert!(sim.is_finished());
        match report.status {
            RunStatus::GenerationLimit { generations } => {
                assert_eq!(generations, 3);
                assert_eq!(report.generations, 3);
                assert_eq!(report.ticks, 3 * 36);
            }
            RunStatus::Solved { .. } => assert!(report.solved),
            other => panic!("unexpected status {:?}", other),
        }
        assert_eq!(sim.tick(&mut SilentProgressCallback), TickOutcome::Finished(report.status));
    }

    #[test]
    fn test_stop_flag_checked_between_ticks() {
        let mut sim = Simulation::new(&config(9)).unwrap();
        let stop = AtomicBool::new(true);
        let report = sim.run_paced(Duration::ZERO, &stop, &mut SilentProgressCallback);
        assert_eq!(report.status, RunStatus::Stopped);
        assert_eq!(report.ticks, 0);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut bad = config(1);
        bad.maze.cols = 2;
        assert!(Simulation::new(&bad).is_err());
    }
}
