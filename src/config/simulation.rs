use super::traits::ConfigSection;
use crate::error::GenmazeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
    /// Independent runs; more than one runs them in parallel with seeds
    /// `seed, seed + 1, ...`
    pub trials: usize,
    pub report_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            seed: None,
            trials: 1,
            report_path: None,
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), GenmazeError> {
        if self.trials == 0 {
            return Err(GenmazeError::Configuration(
                "Trials must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
