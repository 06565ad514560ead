//! Real-time Driver
//!
//! One tokio task owns the [`Simulation`]. It waits on the command channel
//! and the four cadence intervals in a single `select!` loop, so intents and
//! ticks are applied strictly one after another. After every step it
//! publishes a fresh snapshot on a `watch` channel and the step's events on a
//! `broadcast` channel.
//!
//! Intervals are armed with the generation that was current when the night
//! started and re-armed whenever the generation changes.

use std::time::Duration;

use nightwatch_events::{NightEvent, SimulationSnapshot};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval_at, Instant, Interval};

use crate::config::CadenceConfig;
use crate::rng::RandomSource;
use crate::schedule::Cadence;
use crate::simulation::{Intent, Simulation};

/// Events buffered per subscriber before the slowest one starts lagging.
pub const EVENT_BUFFER: usize = 256;

/// Messages accepted by the driver task
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCommand {
    Intent(Intent),
    Shutdown,
}

/// Client side of a running driver.
#[derive(Debug)]
pub struct DriverHandle {
    commands: mpsc::UnboundedSender<DriverCommand>,
    snapshots: watch::Receiver<SimulationSnapshot>,
    events: broadcast::Sender<NightEvent>,
    task: JoinHandle<Simulation>,
}

impl DriverHandle {
    /// Queues an intent. Returns false once the driver has stopped.
    pub fn send(&self, intent: Intent) -> bool {
        self.commands.send(DriverCommand::Intent(intent)).is_ok()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SimulationSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that wakes on every published snapshot.
    pub fn watch(&self) -> watch::Receiver<SimulationSnapshot> {
        self.snapshots.clone()
    }

    /// Events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<NightEvent> {
        self.events.subscribe()
    }

    /// Stops the driver and hands back the simulation.
    pub async fn shutdown(self) -> Result<Simulation, JoinError> {
        // Already stopped if this fails; the join below still returns the state
        let _ = self.commands.send(DriverCommand::Shutdown);
        self.task.await
    }
}

/// Moves `sim` onto a new tokio task and starts driving it.
pub fn spawn<R>(sim: Simulation, rng: R) -> DriverHandle
where
    R: RandomSource + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(sim.snapshot());
    let (event_tx, _) = broadcast::channel(EVENT_BUFFER);

    let task = tokio::spawn(run(sim, rng, command_rx, snapshot_tx, event_tx.clone()));

    DriverHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
        events: event_tx,
        task,
    }
}

/// One interval per cadence.
struct Timers {
    minute: Interval,
    power: Interval,
    movement: Interval,
    threat: Interval,
}

impl Timers {
    fn new(cadence: &CadenceConfig) -> Self {
        Self {
            minute: first_tick_after(cadence.period(Cadence::Minute)),
            power: first_tick_after(cadence.period(Cadence::Power)),
            movement: first_tick_after(cadence.period(Cadence::Movement)),
            threat: first_tick_after(cadence.period(Cadence::Threat)),
        }
    }

    /// Next ticks fall one full period from now.
    fn rearm(&mut self) {
        self.minute.reset();
        self.power.reset();
        self.movement.reset();
        self.threat.reset();
    }
}

fn first_tick_after(period: Duration) -> Interval {
    let period = period.max(Duration::from_millis(1));
    interval_at(Instant::now() + period, period)
}

async fn run<R: RandomSource>(
    mut sim: Simulation,
    mut rng: R,
    mut commands: mpsc::UnboundedReceiver<DriverCommand>,
    snapshots: watch::Sender<SimulationSnapshot>,
    events: broadcast::Sender<NightEvent>,
) -> Simulation {
    let origin = Instant::now();
    let now_ms = move || origin.elapsed().as_millis() as u64;

    let mut timers = Timers::new(&sim.config().cadence);
    let mut armed: Option<u64> = None;
    tracing::debug!("Driver started for session {}", sim.session_id());

    loop {
        let live = armed.is_some();
        let generation = armed.unwrap_or_default();

        tokio::select! {
            biased;

            command = commands.recv() => match command {
                Some(DriverCommand::Intent(intent)) => {
                    sim.apply(intent, now_ms());
                }
                Some(DriverCommand::Shutdown) | None => break,
            },
            _ = timers.minute.tick(), if live => {
                sim.tick(Cadence::Minute, generation, now_ms(), &mut rng);
            }
            _ = timers.power.tick(), if live => {
                sim.tick(Cadence::Power, generation, now_ms(), &mut rng);
            }
            _ = timers.movement.tick(), if live => {
                sim.tick(Cadence::Movement, generation, now_ms(), &mut rng);
            }
            _ = timers.threat.tick(), if live => {
                sim.tick(Cadence::Threat, generation, now_ms(), &mut rng);
            }
        }

        if sim.state().is_running() {
            if armed != Some(sim.generation()) {
                timers.rearm();
                armed = Some(sim.generation());
                tracing::debug!("Timers armed for generation {}", sim.generation());
            }
        } else if armed.take().is_some() {
            tracing::debug!("Timers disarmed in phase {}", sim.phase());
        }

        snapshots.send_replace(sim.snapshot());
        for event in sim.drain_events() {
            // No subscribers is fine
            let _ = events.send(event);
        }
    }

    tracing::debug!("Driver stopped");
    sim
}
