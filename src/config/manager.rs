use super::{
    evolution::EvolutionConfig,
    maze::MazeConfig,
    simulation::SimulationConfig,
    traits::ConfigSection,
};
use crate::error::GenmazeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix for environment overrides, e.g. `GENMAZE_MAZE__ROWS=21`
pub const ENV_PREFIX: &str = "GENMAZE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub maze: MazeConfig,
    pub evolution: EvolutionConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GenmazeError> {
        self.maze.validate()?;
        self.evolution.validate()?;
        self.simulation.validate()?;

        if self.simulation.trials > 1 && self.evolution.max_generations.is_none() {
            return Err(GenmazeError::Configuration(format!(
                "[{}] trials > 1 needs [{}] max_generations to bound each run",
                SimulationConfig::section_name(),
                EvolutionConfig::section_name()
            )));
        }
        Ok(())
    }

    pub fn max_moves(&self) -> usize {
        self.evolution.resolved_max_moves(self.maze.rows, self.maze.cols)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenmazeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GenmazeError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| GenmazeError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    /// Defaults, then the TOML file if it exists, then `GENMAZE_*`
    /// environment variables (`__` separates section and key).
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), GenmazeError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path.as_ref()).required(false));
        }
        let config: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenmazeError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| GenmazeError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| GenmazeError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `f` and keep the result only if it still validates
    pub fn update<F>(&self, f: F) -> Result<(), GenmazeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::FitnessPolicy;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_moves(), 36);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [maze]
            rows = 9

            [evolution]
            fitness_policy = "CollisionPenalty"
            "#,
        )
        .unwrap();
        assert_eq!(config.maze.rows, 9);
        assert_eq!(config.maze.cols, 11);
        assert_eq!(config.evolution.fitness_policy, FitnessPolicy::CollisionPenalty);
        assert_eq!(config.evolution.parent_count, 2);
        assert_eq!(config.max_moves(), 40);
    }

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.maze.rows = 2);
        assert!(matches!(result, Err(GenmazeError::InvalidDimensions { rows: 2, cols: 11 })));
        assert_eq!(manager.get().maze.rows, 7);

        assert!(manager.update(|c| c.evolution.mutation_rate = 1.5).is_err());
        assert!(manager.update(|c| c.evolution.parent_count = 11).is_err());
        assert!(manager.update(|c| c.simulation.trials = 4).is_err());
        assert!(manager
            .update(|c| {
                c.simulation.trials = 4;
                c.evolution.max_generations = Some(100);
            })
            .is_ok());
        assert_eq!(manager.get().simulation.trials, 4);
    }
}
