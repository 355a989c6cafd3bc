use crate::error::{GenmazeError, Result};
use crate::types::Move;
use serde::{Deserialize, Serialize};

/// Genome representation for the maze walkers
///
/// A genome is the full, fixed-length list of moves an individual will try,
/// one per tick. Its length is chosen once per run (`max_moves`) and every
/// operator preserves it:
/// - **Crossover**: a prefix of one parent joined to the suffix of the other
/// - **Mutation**: single moves re-rolled in place
/// - **Uniform mixing**: each position taken from either parent
///
/// Any genome is a valid walk; moves into walls are simply wasted.
///
/// # Example
///
/// ```
/// use genmaze::types::Move;
/// let genome = vec![Move::Right, Move::Right, Move::Down, Move::Down];
/// assert_eq!(genome.len(), 4);
/// ```
pub type Genome = Vec<Move>;

/// Per-move mutation probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MutationRate(f64);

impl MutationRate {
    pub const NEVER: MutationRate = MutationRate(0.0);
    pub const ALWAYS: MutationRate = MutationRate(1.0);

    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GenmazeError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                probability
            )));
        }
        Ok(Self(probability))
    }

    /// Whole-percent rate, e.g. `from_percent(20)` for 0.2
    pub fn from_percent(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(GenmazeError::Configuration(format!(
                "Mutation rate must be at most 100%, got {}%",
                percent
            )));
        }
        Ok(Self(f64::from(percent) / 100.0))
    }

    pub fn probability(self) -> f64 {
        self.0
    }
}

impl Default for MutationRate {
    fn default() -> Self {
        Self(0.2)
    }
}

impl TryFrom<f64> for MutationRate {
    type Error = GenmazeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MutationRate> for f64 {
    fn from(rate: MutationRate) -> f64 {
        rate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_rate_bounds() {
        assert!(MutationRate::new(-0.01).is_err());
        assert!(MutationRate::new(1.01).is_err());
        assert!(MutationRate::new(f64::NAN).is_err());
        assert_eq!(MutationRate::new(0.0).unwrap(), MutationRate::NEVER);
        assert_eq!(MutationRate::new(1.0).unwrap(), MutationRate::ALWAYS);
    }

    #[test]
    fn test_percent_matches_float() {
        assert_eq!(MutationRate::from_percent(20).unwrap(), MutationRate::new(0.2).unwrap());
        assert_eq!(MutationRate::from_percent(100).unwrap(), MutationRate::ALWAYS);
        assert!(MutationRate::from_percent(101).is_err());
    }
}
