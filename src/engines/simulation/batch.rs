use super::driver::{RunReport, Simulation};
use super::progress::SilentProgressCallback;
use crate::config::AppConfig;
use crate::error::Result;
use rayon::prelude::*;

/// Run `trials` independent simulations in parallel.
///
/// Trial `i` uses seed `base_seed + i`, so the whole batch is reproducible.
/// Each run still ticks single-threaded; only whole runs are spread across
/// the rayon pool. Results come back in trial order.
///
/// The config is validated as a batch of `trials` runs up front, so an
/// unbounded `max_generations` is rejected before any trial starts.
pub fn run_trials(config: &AppConfig, base_seed: u64, trials: usize) -> Result<Vec<RunReport>> {
    let mut batch = config.clone();
    batch.simulation.trials = trials;
    batch.validate()?;

    log::info!("Running {} trials from seed {}", trials, base_seed);
    (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut trial = config.clone();
            trial.simulation.seed = Some(base_seed.wrapping_add(i as u64));
            trial.simulation.trials = 1;
            let mut sim = Simulation::new(&trial)?;
            Ok(sim.run(&mut SilentProgressCallback))
        })
        .collect()
}

/// Aggregate view over a batch of trial reports
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchSummary {
    pub trials: usize,
    pub solved: usize,
    pub mean_generations_to_solve: Option<f64>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[RunReport]) -> Self {
        let solved: Vec<&RunReport> = reports.iter().filter(|r| r.solved).collect();
        let mean_generations_to_solve = if solved.is_empty() {
            None
        } else {
            Some(solved.iter().map(|r| r.generations as f64).sum::<f64>() / solved.len() as f64)
        };
        Self {
            trials: reports.len(),
            solved: solved.len(),
            mean_generations_to_solve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenmazeError;

    #[test]
    fn test_trials_are_reproducible() {
        let mut config = AppConfig::default();
        config.evolution.population_size = 5;
        config.evolution.max_generations = Some(4);

        let first = run_trials(&config, 100, 4).unwrap();
        let second = run_trials(&config, 100, 4).unwrap();

        assert_eq!(first.len(), 4);
        for (i, (a, b)) in first.iter().zip(&second).enumerate() {
            assert_eq!(a.seed, Some(100 + i as u64));
            assert_eq!(a.status, b.status);
            assert_eq!(a.ticks, b.ticks);
            assert_eq!(a.best_fitness, b.best_fitness);
        }

        let summary = BatchSummary::from_reports(&first);
        assert_eq!(summary.trials, 4);
        assert!(summary.solved <= 4);
    }

    #[test]
    fn test_unbounded_batch_is_rejected() {
        let config = AppConfig::default();
        assert!(config.evolution.max_generations.is_none());

        let result = run_trials(&config, 7, 4);
        assert!(matches!(result, Err(GenmazeError::Configuration(_))));
        assert!(run_trials(&config, 7, 0).is_err());
    }
}
