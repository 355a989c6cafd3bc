use super::driver::ProgressCallback;
use crate::engines::generation::GenerationReport;

/// Logs generation summaries through `log`
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, report: &GenerationReport) {
        log::info!(
            "End of generation {}: best {} (mean {:.2}), best so far {}",
            report.generation,
            report.best_fitness,
            report.mean_fitness,
            report.best_so_far
        );
    }

    fn on_solved(&mut self, generation: usize, individual: usize, ticks: u64) {
        log::info!(
            "The race is finished: individual {} reached the exit in generation {} after {} ticks",
            individual,
            generation,
            ticks
        );
    }
}

/// Ignores all progress; used for batch trials
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_complete(&mut self, _report: &GenerationReport) {}

    fn on_solved(&mut self, _generation: usize, _individual: usize, _ticks: u64) {}
}
