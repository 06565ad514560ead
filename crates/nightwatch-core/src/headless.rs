//! Headless Runner
//!
//! Fast-forwards whole nights on virtual time. One loop steps a
//! [`TickSchedule`], feeds every due cadence to the simulation and lets the
//! autopilot react after each step.

use nightwatch_events::{ClockTime, EventKind, NightEvent, Phase, SimulationSnapshot};

use crate::autopilot::Autopilot;
use crate::events::EventLogger;
use crate::rng::RandomSource;
use crate::schedule::TickSchedule;
use crate::simulation::Simulation;

/// How one night ended
#[derive(Debug, Clone, PartialEq)]
pub struct NightSummary {
    pub night: u32,
    /// Lost or Won
    pub outcome: Phase,
    pub ended_at: ClockTime,
    pub power_left: u32,
    /// Agent that got in, if the night was lost
    pub breached_by: Option<String>,
    pub moves: usize,
    pub events: usize,
}

impl NightSummary {
    /// An open tally for a night that just started.
    pub fn start(night: u32, power: u32) -> Self {
        Self {
            night,
            outcome: Phase::Running,
            ended_at: ClockTime::midnight(),
            power_left: power,
            breached_by: None,
            moves: 0,
            events: 0,
        }
    }

    /// Folds one event into the tally.
    pub fn record(&mut self, event: &NightEvent) {
        self.events += 1;
        self.ended_at = event.timestamp.clock.clone();
        match &event.kind {
            EventKind::AgentMoved { .. } => self.moves += 1,
            EventKind::ThreatTriggered { agent, .. } => {
                self.breached_by = Some(agent.clone());
                self.outcome = Phase::Lost;
            }
            EventKind::NightWon { .. } => self.outcome = Phase::Won,
            _ => {}
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Closes the tally from a snapshot of this night once it has ended.
    ///
    /// Covers a subscriber that lagged past the event ending the night. The
    /// breaching agent is unknown in that case.
    pub fn settle(&mut self, snapshot: &SimulationSnapshot) -> bool {
        let ended = snapshot.night_index == self.night && snapshot.phase.is_terminal();
        if ended && !self.is_finished() {
            self.outcome = snapshot.phase;
            self.ended_at = snapshot.clock.clone();
            self.power_left = snapshot.power;
        }
        self.is_finished()
    }
}

/// Plays nights back to back on a virtual clock.
#[derive(Debug)]
pub struct HeadlessRunner {
    schedule: TickSchedule,
    pilot: Autopilot,
}

impl HeadlessRunner {
    pub fn new(sim: &Simulation) -> Self {
        Self {
            schedule: TickSchedule::new(&sim.config().cadence, 0),
            pilot: Autopilot::new(),
        }
    }

    /// Virtual milliseconds elapsed so far.
    pub fn now_ms(&self) -> u64 {
        self.schedule.now_ms()
    }

    /// Starts the next night from whatever phase the simulation is in and
    /// plays it to the end.
    ///
    /// A lost night is replayed, a won one advances. Events go to `logger`.
    pub fn play_night(
        &mut self,
        sim: &mut Simulation,
        rng: &mut impl RandomSource,
        logger: &mut EventLogger,
    ) -> std::io::Result<NightSummary> {
        let now = self.schedule.now_ms();
        match sim.phase() {
            Phase::Menu => {
                sim.start_night(now);
            }
            Phase::Won => {
                sim.advance_to_next_night(now);
            }
            Phase::Lost => {
                sim.restart();
                sim.start_night(now);
            }
            Phase::Running => {}
        }
        self.schedule.reset(now);
        let armed = sim.generation();

        let mut summary = NightSummary::start(sim.state().night_index, sim.state().power);

        loop {
            let events = sim.drain_events();
            for event in &events {
                summary.record(event);
            }
            logger.log_batch(&events)?;

            if !sim.state().is_running() {
                break;
            }

            let (at, due) = self.schedule.step();
            for cadence in due {
                sim.tick(cadence, armed, at, rng);
            }
            for intent in self.pilot.decide(&sim.snapshot()) {
                sim.apply(intent, at);
            }
        }

        summary.outcome = sim.phase();
        summary.ended_at = sim.state().clock();
        summary.power_left = sim.state().power;
        tracing::info!(
            "Night {} {} at {} with {}% power",
            summary.night,
            summary.outcome,
            summary.ended_at,
            summary.power_left
        );
        Ok(summary)
    }
}
