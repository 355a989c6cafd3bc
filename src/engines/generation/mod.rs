pub mod genome;
pub mod hall_of_fame;
pub mod individual;
pub mod operators;
pub mod population;

pub use genome::{Genome, MutationRate};
pub use hall_of_fame::{EliteWalker, HallOfFame};
pub use individual::{FitnessPolicy, Individual, StepOutcome, COLLISION_PENALTY, OFF_PATH_PENALTY};
pub use population::{
    GenerationAdvance, GenerationPhase, GenerationReport, Population, PopulationParams,
    TickSummary, CHILDREN_PER_GENERATION,
};
