pub mod traits;
pub mod maze;
pub mod evolution;
pub mod simulation;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use maze::MazeConfig;
pub use evolution::EvolutionConfig;
pub use simulation::SimulationConfig;
pub use traits::ConfigSection;
