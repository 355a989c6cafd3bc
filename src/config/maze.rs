use super::traits::ConfigSection;
use crate::engines::maze::MIN_DIMENSION;
use crate::error::GenmazeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self { rows: 7, cols: 11 }
    }
}

impl ConfigSection for MazeConfig {
    fn section_name() -> &'static str {
        "maze"
    }

    fn validate(&self) -> Result<(), GenmazeError> {
        if self.rows < MIN_DIMENSION || self.cols < MIN_DIMENSION {
            return Err(GenmazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows % 2 == 0 || self.cols % 2 == 0 {
            log::warn!(
                "Maze {}x{} has an even side; the exit may be walled off",
                self.rows,
                self.cols
            );
        }
        Ok(())
    }
}
