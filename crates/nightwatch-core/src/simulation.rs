//! Simulation Orchestrator
//!
//! Owns the [`SimulationState`] and is the only thing that mutates it. Player
//! intents and driver ticks both come through here and are applied one at a
//! time. Rejected intents and stale ticks are silent no-ops that return
//! `false`.
//!
//! Every transition into or out of the running phase bumps a generation
//! counter. Drivers tag each tick with the generation they were armed for, so
//! a timer that fires after the night ended can never touch the state.

use nightwatch_events::{
    generate_snapshot_id, CameraFeed, DoorView, EventKind, LocationId, NightEvent,
    NightTimestamp, Phase, Side, SimulationSnapshot, Subsystem,
};
use uuid::Uuid;

use crate::components::{door_of, light_of, LocationGraph};
use crate::config::Config;
use crate::events::EventQueue;
use crate::rng::RandomSource;
use crate::schedule::Cadence;
use crate::setup::spawn_agents;
use crate::state::SimulationState;
use crate::systems::{self, ClockOutcome, DrainOutcome, MoveContext};

/// A request from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartNight,
    ToggleDoor(Side),
    ToggleLight(Side),
    ToggleCameraMode,
    /// Raw camera id as typed or clicked, e.g. "west-hall"
    SelectCamera(String),
    ExitToMenu,
    AdvanceToNextNight,
    Restart,
}

/// The authoritative simulation.
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    graph: LocationGraph,
    state: SimulationState,
    events: EventQueue,
    generation: u64,
    revision: u64,
    session_id: Uuid,
}

impl Simulation {
    /// A menu-phase simulation with the configured roster at spawn.
    pub fn new(config: Config) -> Self {
        let state = SimulationState::new(spawn_agents(&config.agents), config.power.max_power);
        Self {
            graph: LocationGraph::standard(),
            state,
            events: EventQueue::new(),
            generation: 0,
            revision: 0,
            session_id: Uuid::new_v4(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Identifies the current running period. Ticks must carry this value.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Applies one intent. Returns false if it was rejected.
    pub fn apply(&mut self, intent: Intent, now_ms: u64) -> bool {
        match intent {
            Intent::StartNight => self.start_night(now_ms),
            Intent::ToggleDoor(side) => self.toggle_door(side),
            Intent::ToggleLight(side) => self.toggle_light(side),
            Intent::ToggleCameraMode => self.toggle_camera_mode(),
            Intent::SelectCamera(id) => self.select_camera(&id),
            Intent::ExitToMenu => self.exit_to_menu(),
            Intent::AdvanceToNextNight => self.advance_to_next_night(now_ms),
            Intent::Restart => self.restart(),
        }
    }

    /// Menu → Running at the current night index.
    pub fn start_night(&mut self, now_ms: u64) -> bool {
        if self.state.phase != Phase::Menu {
            return self.reject("start_night");
        }
        self.begin_night(now_ms);
        self.applied()
    }

    /// Won → Running on the following night.
    pub fn advance_to_next_night(&mut self, now_ms: u64) -> bool {
        if self.state.phase != Phase::Won {
            return self.reject("advance_to_next_night");
        }
        self.state.night_index += 1;
        self.begin_night(now_ms);
        self.applied()
    }

    /// Lost or Won → Menu. The night index is kept so the same night can be
    /// replayed.
    pub fn restart(&mut self) -> bool {
        if !self.state.phase.is_terminal() {
            return self.reject("restart");
        }
        self.return_to_menu();
        self.applied()
    }

    /// Abandons whatever is going on and returns to the menu.
    pub fn exit_to_menu(&mut self) -> bool {
        if self.state.phase == Phase::Menu {
            return self.reject("exit_to_menu");
        }
        if self.state.is_running() {
            self.end_running();
        }
        self.return_to_menu();
        self.applied()
    }

    pub fn toggle_door(&mut self, side: Side) -> bool {
        self.toggle_subsystem(door_of(side))
    }

    pub fn toggle_light(&mut self, side: Side) -> bool {
        self.toggle_subsystem(light_of(side))
    }

    /// Raises or lowers the camera monitor.
    pub fn toggle_camera_mode(&mut self) -> bool {
        self.toggle_subsystem(Subsystem::Camera)
    }

    /// Switches the monitor to another camera. Requires the monitor to be up
    /// and `raw_id` to name a location.
    pub fn select_camera(&mut self, raw_id: &str) -> bool {
        if !self.controls_live() || !self.state.subsystems.camera_active {
            return self.reject("select_camera");
        }
        let Some(location) = self.graph.resolve(raw_id) else {
            tracing::trace!("Ignoring unknown camera id '{}'", raw_id);
            return false;
        };
        self.state.selected_camera = location;
        self.emit(EventKind::CameraSelected { location });
        self.applied()
    }

    fn toggle_subsystem(&mut self, subsystem: Subsystem) -> bool {
        if !self.controls_live() {
            return self.reject("toggle");
        }
        let active = self.state.subsystems.toggle(subsystem);
        tracing::debug!("{} -> {}", subsystem, if active { "on" } else { "off" });
        self.emit(EventKind::SubsystemToggled { subsystem, active });
        self.applied()
    }

    /// Player controls respond only while running with power left.
    fn controls_live(&self) -> bool {
        self.state.is_running() && self.state.power > 0
    }

    // ------------------------------------------------------------------
    // Ticks
    // ------------------------------------------------------------------

    /// Applies one driver tick armed for `generation`.
    ///
    /// Ignored unless the night is running and `generation` is current.
    pub fn tick(
        &mut self,
        cadence: Cadence,
        generation: u64,
        now_ms: u64,
        rng: &mut impl RandomSource,
    ) -> bool {
        if generation != self.generation || !self.state.is_running() {
            tracing::trace!(
                "Dropping stale {:?} tick (armed {}, current {}, phase {})",
                cadence,
                generation,
                self.generation,
                self.state.phase
            );
            return false;
        }

        match cadence {
            Cadence::Minute => self.advance_minute(),
            Cadence::Power => self.drain_power(),
            Cadence::Movement => self.move_agents(now_ms, rng),
            Cadence::Threat => self.check_threats(rng),
        }
        self.applied()
    }

    fn advance_minute(&mut self) {
        if systems::advance(&mut self.state, &self.config.night) == ClockOutcome::NightComplete {
            self.end_running();
            let night = self.state.night_index;
            tracing::info!("Night {} survived", night);
            self.emit(EventKind::NightWon { night });
        }
    }

    fn drain_power(&mut self) {
        if systems::drain(&mut self.state, &self.config.power) == DrainOutcome::Depleted {
            tracing::warn!("Power out at {}", self.state.clock());
            self.emit(EventKind::PowerDepleted);
        }
    }

    fn move_agents(&mut self, now_ms: u64, rng: &mut impl RandomSource) {
        let ctx = MoveContext {
            night_index: self.state.night_index,
            elapsed_minutes: self.state.elapsed_minutes,
        };
        for i in 0..self.state.agents.len() {
            let current = &self.state.agents[i];
            let from = current.location;
            let next = systems::try_move(
                current,
                ctx,
                now_ms,
                &self.graph,
                &self.config.movement,
                rng,
            );
            if next.is_moving {
                tracing::debug!("{} moved {} -> {}", next.name, from, next.location);
                self.emit(EventKind::AgentMoved {
                    agent: next.name.clone(),
                    kind: next.kind,
                    from,
                    to: next.location,
                });
            }
            self.state.agents[i] = next;
        }
    }

    fn check_threats(&mut self, rng: &mut impl RandomSource) {
        if let Some(breach) = systems::check_loss(&mut self.state, &self.config.threat, rng) {
            self.end_running();
            tracing::info!(
                "{} got through the {} door on night {}",
                breach.agent,
                breach.side,
                self.state.night_index
            );
            self.emit(EventKind::ThreatTriggered {
                agent: breach.agent,
                side: breach.side,
            });
        }
    }

    // ------------------------------------------------------------------
    // Phase transitions
    // ------------------------------------------------------------------

    fn begin_night(&mut self, now_ms: u64) {
        self.state.reset_night(now_ms, self.config.power.max_power);
        self.state.phase = Phase::Running;
        self.generation += 1;
        let night = self.state.night_index;
        tracing::info!("Night {} started (generation {})", night, self.generation);
        self.emit(EventKind::NightStarted { night });
    }

    /// Invalidates every tick armed for the running period that just ended.
    fn end_running(&mut self) {
        self.generation += 1;
    }

    fn return_to_menu(&mut self) {
        let from = self.state.phase;
        self.emit(EventKind::ReturnedToMenu { from });
        self.state.reset_night(0, self.config.power.max_power);
        self.state.phase = Phase::Menu;
        tracing::info!("Returned to menu from {}", from);
    }

    fn reject(&self, intent: &str) -> bool {
        tracing::trace!(
            "Ignoring {} in phase {} with power {}",
            intent,
            self.state.phase,
            self.state.power
        );
        false
    }

    fn applied(&mut self) -> bool {
        self.revision += 1;
        true
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    fn timestamp(&self) -> NightTimestamp {
        NightTimestamp::new(self.state.night_index, self.state.elapsed_minutes)
    }

    fn emit(&mut self, kind: EventKind) {
        let timestamp = self.timestamp();
        self.events.push(timestamp, kind);
    }

    /// Takes every event emitted since the last call.
    ///
    /// Callers that never drain lose the oldest events past
    /// [`EVENT_QUEUE_CAPACITY`](crate::events::EVENT_QUEUE_CAPACITY).
    pub fn drain_events(&mut self) -> Vec<NightEvent> {
        self.events.drain()
    }

    /// What the monitor shows, if it is up.
    pub fn camera_feed(&self) -> Option<CameraFeed> {
        if !self.state.subsystems.camera_active {
            return None;
        }
        let location = self.state.selected_camera;
        Some(CameraFeed {
            location,
            agents_present: self.state.agents_at(location),
        })
    }

    /// Agents revealed by the light on `side`.
    pub fn visible_at_door(&self, side: Side) -> Vec<String> {
        self.state.visible_at_door(side)
    }

    /// Power drawn on the next power tick.
    pub fn power_usage(&self) -> u32 {
        systems::usage(&self.state.subsystems, &self.config.power)
    }

    /// Agents currently at `location`.
    pub fn agents_at(&self, location: LocationId) -> Vec<String> {
        self.state.agents_at(location)
    }

    /// Serializable view for presentation.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let state = &self.state;
        SimulationSnapshot {
            snapshot_id: generate_snapshot_id(self.revision),
            session_id: self.session_id,
            generation: self.generation,
            phase: state.phase,
            night_index: state.night_index,
            elapsed_minutes: state.elapsed_minutes,
            clock: state.clock(),
            power: state.power,
            power_usage: self.power_usage(),
            subsystems: state.subsystems.snapshot(),
            selected_camera: state.selected_camera,
            camera_feed: self.camera_feed(),
            doors: Side::BOTH
                .into_iter()
                .map(|side| DoorView {
                    side,
                    door_closed: state.subsystems.door_closed(side),
                    light_on: state.subsystems.light_on(side),
                    visible_agents: state.visible_at_door(side),
                })
                .collect(),
            agents: state.agents.iter().map(|a| a.snapshot()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::RUNNER_ROUTE;
    use crate::rng::{ScriptedRolls, SimRng};
    use nightwatch_events::EventType;

    fn running() -> Simulation {
        let mut sim = Simulation::new(Config::default());
        assert!(sim.start_night(0));
        sim.drain_events();
        sim
    }

    fn tick(sim: &mut Simulation, cadence: Cadence, now_ms: u64, rng: &mut impl RandomSource) -> bool {
        let generation = sim.generation();
        sim.tick(cadence, generation, now_ms, rng)
    }

    #[test]
    fn test_new_simulation_is_menu() {
        let sim = Simulation::new(Config::default());
        assert_eq!(sim.phase(), Phase::Menu);
        assert_eq!(sim.state().night_index, 1);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_start_night() {
        let mut sim = Simulation::new(Config::default());
        assert!(sim.start_night(1_234));
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.generation(), 1);
        assert!(sim.state().agents.iter().all(|a| a.last_move_ms == 1_234));

        let events = sim.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::NightStarted { night: 1 });

        // Only valid from the menu
        assert!(!sim.start_night(2_000));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_intents_ignored_outside_running() {
        let mut sim = Simulation::new(Config::default());
        let before = sim.state().clone();
        assert!(!sim.toggle_door(Side::Left));
        assert!(!sim.toggle_light(Side::Right));
        assert!(!sim.toggle_camera_mode());
        assert!(!sim.select_camera("backstage"));
        assert!(!sim.restart());
        assert!(!sim.exit_to_menu());
        assert!(!sim.advance_to_next_night(0));
        assert_eq!(sim.state(), &before);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_toggle_door_emits_event() {
        let mut sim = running();
        assert!(sim.toggle_door(Side::Right));
        assert!(sim.state().subsystems.right_door_closed);
        assert_eq!(sim.power_usage(), 3);

        let events = sim.drain_events();
        assert_eq!(
            events[0].kind,
            EventKind::SubsystemToggled {
                subsystem: Subsystem::RightDoor,
                active: true
            }
        );
    }

    #[test]
    fn test_toggle_at_zero_power_is_noop() {
        let mut sim = running();
        sim.state.power = 0;
        let before = sim.state().clone();

        assert!(!sim.toggle_door(Side::Left));
        assert!(!sim.toggle_light(Side::Left));
        assert!(!sim.toggle_camera_mode());
        assert_eq!(sim.state(), &before);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_drain_to_blackout_scenario() {
        let mut sim = running();
        sim.toggle_door(Side::Left);
        sim.toggle_light(Side::Left);
        sim.state.power = 2;
        sim.drain_events();

        assert!(tick(&mut sim, Cadence::Power, 1_000, &mut ScriptedRolls::fixed(0.5)));
        assert_eq!(sim.state().power, 0);
        assert!(!sim.state().subsystems.left_door_closed);
        assert!(!sim.state().subsystems.left_light_on);
        assert_eq!(sim.drain_events()[0].kind, EventKind::PowerDepleted);

        // Blackout is one-way for the night
        assert!(!sim.toggle_door(Side::Left));
        assert!(tick(&mut sim, Cadence::Power, 2_000, &mut ScriptedRolls::fixed(0.5)));
        assert_eq!(sim.state().power, 0);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_camera_selection() {
        let mut sim = running();
        assert!(sim.camera_feed().is_none());
        // Monitor must be up first
        assert!(!sim.select_camera("pirate-cove"));

        assert!(sim.toggle_camera_mode());
        let feed = sim.camera_feed().unwrap();
        assert_eq!(feed.location, LocationId::ShowStage);
        assert_eq!(feed.agents_present, vec!["Freddy", "Bonnie", "Chica"]);

        assert!(sim.select_camera("pirate-cove"));
        assert_eq!(sim.camera_feed().unwrap().agents_present, vec!["Foxy"]);

        let before = sim.state().clone();
        assert!(!sim.select_camera("parts-and-service"));
        assert_eq!(sim.state(), &before);

        // Lowering the monitor keeps the selection for next time
        assert!(sim.toggle_camera_mode());
        assert!(sim.camera_feed().is_none());
        assert!(sim.toggle_camera_mode());
        assert_eq!(sim.camera_feed().unwrap().location, LocationId::PirateCove);
    }

    #[test]
    fn test_foxy_scenario_does_not_move() {
        let mut sim = running();
        let mut rng = ScriptedRolls::fixed(0.5);
        assert!(tick(&mut sim, Cadence::Movement, 10_000, &mut rng));
        let foxy = sim.state().agent("Foxy").unwrap();
        assert_eq!(foxy.location, LocationId::PirateCove);
        assert!(!foxy.is_moving);
        assert!(sim.drain_events().is_empty());
    }

    #[test]
    fn test_movement_emits_events() {
        let mut sim = running();
        // Every agent beats its odds and takes the first candidate
        let mut rng = ScriptedRolls::fixed(0.0);
        assert!(tick(&mut sim, Cadence::Movement, 6_000, &mut rng));

        let moved: Vec<_> = sim
            .drain_events()
            .into_iter()
            .filter(|e| e.event_type() == EventType::Movement)
            .collect();
        assert_eq!(moved.len(), 4);

        let foxy = sim.state().agent("Foxy").unwrap();
        assert_eq!(foxy.location, RUNNER_ROUTE[0]);
        assert!(foxy.is_moving);
        let freddy = sim.state().agent("Freddy").unwrap();
        assert_eq!(freddy.location, LocationId::DiningArea);
        assert_eq!(freddy.last_move_ms, 6_000);
    }

    #[test]
    fn test_breach_scenario_loses() {
        let mut sim = running();
        sim.state.agent_mut("Chica").unwrap().location = LocationId::EastHallCorner;
        let generation = sim.generation();

        assert!(tick(&mut sim, Cadence::Threat, 1_000, &mut ScriptedRolls::fixed(0.1)));
        assert_eq!(sim.phase(), Phase::Lost);
        assert_ne!(sim.generation(), generation);

        let events = sim.drain_events();
        assert_eq!(
            events.last().unwrap().kind,
            EventKind::ThreatTriggered {
                agent: "Chica".into(),
                side: Side::Right
            }
        );
    }

    #[test]
    fn test_night_won_exactly_once() {
        let mut sim = running();
        let mut rng = ScriptedRolls::fixed(0.5);
        let generation = sim.generation();
        for minute in 1..=360u64 {
            assert!(sim.tick(Cadence::Minute, generation, minute * 100, &mut rng));
        }
        assert_eq!(sim.phase(), Phase::Won);
        assert_eq!(sim.state().elapsed_minutes, 360);
        assert_eq!(sim.snapshot().clock.to_string(), "6:00 AM");

        // Further minute ticks are rejected, whichever generation they carry
        assert!(!sim.tick(Cadence::Minute, generation, 36_100, &mut rng));
        assert!(!tick(&mut sim, Cadence::Minute, 36_200, &mut rng));
        assert_eq!(sim.state().elapsed_minutes, 360);

        let won: Vec<_> = sim
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e.kind, EventKind::NightWon { .. }))
            .collect();
        assert_eq!(won.len(), 1);
        assert_eq!(won[0].timestamp.minute, 360);
    }

    #[test]
    fn test_stale_generation_tick_is_dropped() {
        let mut sim = running();
        let stale = sim.generation();
        assert!(sim.exit_to_menu());
        assert!(sim.start_night(5_000));

        let mut rng = ScriptedRolls::fixed(0.5);
        assert!(!sim.tick(Cadence::Minute, stale, 5_100, &mut rng));
        assert_eq!(sim.state().elapsed_minutes, 0);

        assert!(tick(&mut sim, Cadence::Minute, 5_100, &mut rng));
        assert_eq!(sim.state().elapsed_minutes, 1);
    }

    #[test]
    fn test_advance_to_next_night() {
        let mut sim = running();
        sim.state.phase = Phase::Won;
        sim.state.elapsed_minutes = 360;
        sim.state.power = 40;

        assert!(sim.advance_to_next_night(50_000));
        assert_eq!(sim.phase(), Phase::Running);
        assert_eq!(sim.state().night_index, 2);
        assert_eq!(sim.state().elapsed_minutes, 0);
        assert_eq!(sim.state().power, 100);
    }

    #[test]
    fn test_lost_cannot_advance() {
        let mut sim = running();
        sim.state.phase = Phase::Lost;
        assert!(!sim.advance_to_next_night(0));
        assert!(!sim.start_night(0));
        assert_eq!(sim.phase(), Phase::Lost);
    }

    #[test]
    fn test_restart_after_loss_matches_fresh_spawn() {
        let fresh = Simulation::new(Config::default());

        let mut sim = running();
        sim.toggle_door(Side::Left);
        sim.toggle_camera_mode();
        sim.select_camera("backstage");
        let mut rng = SimRng::seed_from_u64(9);
        for minute in 1..=100u64 {
            tick(&mut sim, Cadence::Minute, minute * 100, &mut rng);
            tick(&mut sim, Cadence::Power, minute * 100, &mut rng);
        }
        sim.state.agent_mut("Bonnie").unwrap().location = LocationId::WestHallCorner;
        sim.toggle_door(Side::Left);
        tick(&mut sim, Cadence::Threat, 10_100, &mut ScriptedRolls::fixed(0.0));
        assert_eq!(sim.phase(), Phase::Lost);

        assert!(sim.restart());
        assert_eq!(sim.state(), fresh.state());
    }

    #[test]
    fn test_menu_after_win_keeps_night_index() {
        let mut sim = running();
        sim.state.phase = Phase::Won;
        assert!(sim.advance_to_next_night(0));
        sim.state.phase = Phase::Won;
        sim.state.elapsed_minutes = 360;

        assert!(sim.exit_to_menu());
        let mut expected = Simulation::new(Config::default()).state().clone();
        expected.night_index = 2;
        assert_eq!(sim.state(), &expected);

        let events = sim.drain_events();
        assert_eq!(events.last().unwrap().kind, EventKind::ReturnedToMenu { from: Phase::Won });
    }

    #[test]
    fn test_exit_to_menu_while_running_invalidates_ticks() {
        let mut sim = running();
        let armed = sim.generation();
        assert!(sim.exit_to_menu());
        assert_eq!(sim.phase(), Phase::Menu);
        assert!(!sim.tick(Cadence::Minute, armed, 100, &mut ScriptedRolls::fixed(0.5)));
        assert_eq!(sim.state().elapsed_minutes, 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut sim = running();
        sim.toggle_light(Side::Right);
        sim.state.agent_mut("Chica").unwrap().location = LocationId::EastHallCorner;

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.phase, Phase::Running);
        assert_eq!(snapshot.power_usage, 2);
        assert!(snapshot.subsystems.right_light_on);
        assert_eq!(snapshot.door(Side::Right).unwrap().visible_agents, vec!["Chica"]);
        assert!(snapshot.door(Side::Left).unwrap().visible_agents.is_empty());
        assert_eq!(snapshot.agents.len(), 4);
        assert_eq!(snapshot.session_id, sim.session_id());
        assert!(snapshot.camera_feed.is_none());
    }

    #[test]
    fn test_invariants_hold_over_random_nights() {
        let mut sim = Simulation::new(Config::default());
        let mut rng = SimRng::seed_from_u64(2024);
        sim.start_night(0);
        let mut now = 0u64;
        let mut last_minutes = 0;
        for step in 0..20_000u64 {
            now += 100;
            let generation = sim.generation();
            sim.tick(Cadence::Minute, generation, now, &mut rng);
            if step % 10 == 9 {
                sim.tick(Cadence::Power, generation, now, &mut rng);
                sim.tick(Cadence::Movement, generation, now, &mut rng);
                sim.tick(Cadence::Threat, generation, now, &mut rng);
            }
            if step % 37 == 0 {
                sim.toggle_door(Side::Left);
                sim.toggle_light(Side::Right);
            }

            let state = sim.state();
            assert!(state.power <= 100);
            if state.power == 0 {
                assert!(!state.subsystems.any_active());
            }
            for agent in &state.agents {
                assert!(sim.graph().contains(agent.location));
                if agent.kind == nightwatch_events::AgentKind::Runner {
                    assert!(RUNNER_ROUTE.contains(&agent.location));
                }
            }
            if state.is_running() {
                assert!(state.elapsed_minutes >= last_minutes);
            }
            last_minutes = state.elapsed_minutes;

            match sim.phase() {
                Phase::Won => {
                    sim.advance_to_next_night(now);
                    last_minutes = 0;
                }
                Phase::Lost => {
                    sim.restart();
                    sim.start_night(now);
                    last_minutes = 0;
                }
                _ => {}
            }
        }
    }
}
