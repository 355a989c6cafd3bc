use anyhow::Context;
use genmaze::config::{AppConfig, ConfigManager};
use genmaze::engines::simulation::{
    run_trials, BatchSummary, ConsoleProgressCallback, RunReport, Simulation,
};
use genmaze::ui;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::AtomicBool;

/// Never set by the binary itself; embedders flip it to stop between ticks.
static STOP: AtomicBool = AtomicBool::new(false);

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let manager = ConfigManager::new();
    manager
        .load_layered(path)
        .with_context(|| match path {
            Some(p) => format!("Failed to load configuration from '{}'", p.display()),
            None => "Failed to load configuration from the environment".to_string(),
        })?;
    Ok(manager.get())
}

fn write_report<T: serde::Serialize>(path: &Path, report: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write run report to '{}'", path.display()))?;
    log::info!("Run report written to '{}'", path.display());
    Ok(())
}

fn run_single(config: &AppConfig) -> anyhow::Result<RunReport> {
    let mut sim = Simulation::new(config).context("Failed to set up the simulation")?;
    log::info!("Maze:\n{}", ui::render_grid(sim.grid()));

    let report = sim.run_paced(
        config.simulation.tick_interval(),
        &STOP,
        &mut ConsoleProgressCallback,
    );

    log::info!(
        "Final positions:\n{}",
        ui::render(sim.grid(), sim.population().individuals())
    );
    Ok(report)
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path.as_deref())?;
    log::info!(
        "Configuration loaded: {}x{} maze, population {}, {} moves",
        config.maze.rows,
        config.maze.cols,
        config.evolution.population_size,
        config.max_moves()
    );

    if config.simulation.trials > 1 {
        let base_seed = config.simulation.seed.unwrap_or_else(rand::random);
        let reports = run_trials(&config, base_seed, config.simulation.trials)
            .context("Batch run failed")?;
        let summary = BatchSummary::from_reports(&reports);
        log::info!(
            "{} of {} trials solved; mean generations to solve: {}",
            summary.solved,
            summary.trials,
            summary
                .mean_generations_to_solve
                .map_or_else(|| "n/a".to_string(), |g| format!("{:.1}", g))
        );
        if let Some(path) = &config.simulation.report_path {
            write_report(path, &reports)?;
        }
        return Ok(());
    }

    let report = run_single(&config)?;
    log::info!(
        "Run finished after {} generations and {} ticks: {:?}",
        report.generations,
        report.ticks,
        report.status
    );
    if let Some(path) = &config.simulation.report_path {
        write_report(path, &report)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Booting genmaze...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    if let Err(e) = run(config_path) {
        log::error!("{:#}", e);
        process::exit(1);
    }
}
