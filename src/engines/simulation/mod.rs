pub mod batch;
pub mod driver;
pub mod progress;

pub use batch::{run_trials, BatchSummary};
pub use driver::{ProgressCallback, RunReport, RunStatus, Simulation, TickOutcome};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
