use super::traits::ConfigSection;
use crate::engines::generation::{FitnessPolicy, MutationRate};
use crate::error::GenmazeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Moves per individual; `None` means `2 * (rows + cols)`
    pub max_moves: Option<usize>,
    pub mutation_rate: f64,
    pub parent_count: usize,
    pub fitness_policy: FitnessPolicy,
    pub hall_of_fame_size: usize,
    /// Stop after this many generations; `None` runs until solved
    pub max_generations: Option<usize>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_moves: None,
            mutation_rate: 0.2,
            parent_count: 2,
            fitness_policy: FitnessPolicy::PathGuided,
            hall_of_fame_size: 5,
            max_generations: None,
        }
    }
}

impl EvolutionConfig {
    pub fn resolved_max_moves(&self, rows: usize, cols: usize) -> usize {
        self.max_moves.unwrap_or(2 * (rows + cols))
    }

    pub fn mutation_rate(&self) -> Result<MutationRate, GenmazeError> {
        MutationRate::new(self.mutation_rate)
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GenmazeError> {
        if self.population_size < 2 {
            return Err(GenmazeError::Configuration(
                "Population size must be at least 2".to_string()
            ));
        }
        if self.parent_count < 2 || self.parent_count > self.population_size {
            return Err(GenmazeError::Configuration(format!(
                "Parent count must be between 2 and the population size ({})",
                self.population_size
            )));
        }
        self.mutation_rate()?;
        if self.max_moves == Some(0) {
            return Err(GenmazeError::Configuration(
                "Max moves must be at least 1".to_string()
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(GenmazeError::Configuration(
                "Hall of fame size must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
