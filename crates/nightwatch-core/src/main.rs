//! Nightwatch
//!
//! Plays nights of the security-office survival simulation with the
//! autopilot at the desk, either fast-forwarded on a virtual clock or in real
//! time on a tokio runtime.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use nightwatch_core::driver;
use nightwatch_core::output::snapshot_json;
use nightwatch_core::setup::get_spawn_summary;
use nightwatch_core::{
    Autopilot, Config, ConfigError, EventLogger, HeadlessRunner, Intent, NightSummary,
    Simulation, SimRng,
};
use nightwatch_events::{EventKind, Phase, SimulationSnapshot};
use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::prelude::*;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "nightwatch")]
#[command(about = "Survive the night shift: doors, lights and a failing power budget")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of nights to play; a lost night is replayed and still counts
    #[arg(long, default_value_t = 1)]
    nights: u32,

    /// Tuning file (defaults to tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// How time passes
    #[arg(long, value_enum, default_value_t = Mode::Headless)]
    mode: Mode,

    /// Write every event to this JSONL file
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Fast-forward on a virtual clock
    Headless,
    /// Tick on the wall clock
    Realtime,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("event log: {0}")]
    EventLog(#[source] std::io::Error),
    #[error("runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("driver task failed: {0}")]
    Driver(#[from] tokio::task::JoinError),
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    let mut logger = match &args.events_out {
        Some(path) => EventLogger::create(path).map_err(RunError::EventLog)?,
        None => EventLogger::null(),
    };

    println!("Nightwatch");
    println!("==========");
    println!("Seed: {}", args.seed);
    println!("Nights: {}", args.nights);
    println!("Mode: {:?}", args.mode);
    println!();

    let sim = Simulation::new(config);
    let roster = get_spawn_summary(&sim.state().agents);
    println!("Spawned {} agents", roster.total_agents);
    for (location, names) in &roster.by_location {
        println!("  {}: {}", location, names.join(", "));
    }
    println!();

    let rng = SimRng::seed_from_u64(args.seed);
    let (summaries, last) = match args.mode {
        Mode::Headless => play_headless(sim, rng, args.nights, &mut logger)?,
        Mode::Realtime => {
            let runtime = tokio::runtime::Runtime::new().map_err(RunError::Runtime)?;
            runtime.block_on(play_realtime(sim, rng, args.nights, &mut logger))?
        }
    };
    logger.flush().map_err(RunError::EventLog)?;

    for summary in &summaries {
        print_summary(summary);
    }
    let won = summaries.iter().filter(|s| s.outcome == Phase::Won).count();
    println!();
    println!(
        "Survived {} of {} nights. Logged {} events.",
        won,
        summaries.len(),
        logger.event_count()
    );

    if args.snapshot {
        println!("{}", snapshot_json(&last)?);
    }
    Ok(())
}

fn print_summary(summary: &NightSummary) {
    match &summary.breached_by {
        Some(agent) => println!(
            "Night {}: lost to {} at {} ({}% power, {} moves)",
            summary.night, agent, summary.ended_at, summary.power_left, summary.moves
        ),
        None => println!(
            "Night {}: {} at {} ({}% power, {} moves)",
            summary.night, summary.outcome, summary.ended_at, summary.power_left, summary.moves
        ),
    }
}

fn play_headless(
    mut sim: Simulation,
    mut rng: SimRng,
    nights: u32,
    logger: &mut EventLogger,
) -> Result<(Vec<NightSummary>, SimulationSnapshot), RunError> {
    let mut runner = HeadlessRunner::new(&sim);
    let mut summaries = Vec::new();
    for _ in 0..nights {
        let summary = runner
            .play_night(&mut sim, &mut rng, logger)
            .map_err(RunError::EventLog)?;
        summaries.push(summary);
    }
    Ok((summaries, sim.snapshot()))
}

async fn play_realtime(
    sim: Simulation,
    rng: SimRng,
    nights: u32,
    logger: &mut EventLogger,
) -> Result<(Vec<NightSummary>, SimulationSnapshot), RunError> {
    let handle = driver::spawn(sim, rng);
    let mut snapshots = handle.watch();
    let mut events = handle.subscribe();
    let pilot = Autopilot::new();
    let mut summaries: Vec<NightSummary> = Vec::new();
    let mut current: Option<NightSummary> = None;

    if nights > 0 {
        handle.send(Intent::StartNight);
    }

    while summaries.len() < nights as usize {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                for intent in pilot.decide(&snapshot) {
                    handle.send(intent);
                }
            }
            received = events.recv() => {
                match received {
                    Ok(event) => {
                        logger.log(&event).map_err(RunError::EventLog)?;
                        if let EventKind::NightStarted { night } = event.kind {
                            current = Some(NightSummary::start(night, handle.snapshot().power));
                        }
                        if let Some(summary) = current.as_mut() {
                            summary.record(&event);
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Event log skipped {} events", skipped);
                        catch_up(&mut current, &handle.snapshot());
                    }
                    Err(RecvError::Closed) => break,
                }

                if current.as_ref().is_some_and(NightSummary::is_finished) {
                    if let Some(mut summary) = current.take() {
                        summary.power_left = handle.snapshot().power;
                        let outcome = summary.outcome;
                        summaries.push(summary);
                        if summaries.len() < nights as usize {
                            next_night(&handle, outcome);
                        }
                    }
                }
            }
        }
    }

    let sim = handle.shutdown().await?;
    Ok((summaries, sim.snapshot()))
}

/// Recovers the night tally after the event stream skipped ahead.
fn catch_up(current: &mut Option<NightSummary>, snapshot: &SimulationSnapshot) {
    if let Some(summary) = current.as_mut() {
        summary.settle(snapshot);
    } else if snapshot.phase == Phase::Running {
        *current = Some(NightSummary::start(snapshot.night_index, snapshot.power));
    }
}

fn next_night(handle: &driver::DriverHandle, outcome: Phase) {
    if outcome == Phase::Won {
        handle.send(Intent::AdvanceToNextNight);
    } else {
        handle.send(Intent::Restart);
        handle.send(Intent::StartNight);
    }
}
