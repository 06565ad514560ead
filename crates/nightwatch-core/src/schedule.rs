//! Tick Schedule
//!
//! The periodic drivers of a night, and a virtual-time scheduler that fires
//! them from one loop. The real-time driver uses tokio intervals instead; both
//! feed the same [`Cadence`] ticks into the simulation.

use crate::config::CadenceConfig;

/// One periodic driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// Advance the clock
    Minute,
    /// Drain power
    Power,
    /// Roll agent movement
    Movement,
    /// Roll breaches
    Threat,
}

impl Cadence {
    /// Every cadence, in the order same-instant ticks are applied.
    pub const ALL: [Cadence; 4] = [
        Cadence::Minute,
        Cadence::Power,
        Cadence::Movement,
        Cadence::Threat,
    ];

    fn index(self) -> usize {
        match self {
            Cadence::Minute => 0,
            Cadence::Power => 1,
            Cadence::Movement => 2,
            Cadence::Threat => 3,
        }
    }

    /// Name of the tuning key holding this cadence's period.
    pub fn config_key(self) -> &'static str {
        match self {
            Cadence::Minute => "cadence.minute_tick_ms",
            Cadence::Power => "cadence.power_tick_ms",
            Cadence::Movement => "cadence.movement_tick_ms",
            Cadence::Threat => "cadence.threat_tick_ms",
        }
    }
}

/// Cadence counters over virtual milliseconds.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    periods: [u64; 4],
    next_due: [u64; 4],
    now_ms: u64,
}

impl TickSchedule {
    /// First ticks fall one period after `start_ms`.
    pub fn new(cadence: &CadenceConfig, start_ms: u64) -> Self {
        let periods = Cadence::ALL.map(|c| cadence.period_ms(c).max(1));
        let mut schedule = Self {
            periods,
            next_due: periods,
            now_ms: start_ms,
        };
        schedule.reset(start_ms);
        schedule
    }

    /// Restarts every counter from `start_ms`.
    pub fn reset(&mut self, start_ms: u64) {
        self.now_ms = start_ms;
        for (due, period) in self.next_due.iter_mut().zip(self.periods) {
            *due = start_ms + period;
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Earliest pending deadline.
    pub fn next_due_ms(&self) -> u64 {
        self.next_due.iter().copied().min().unwrap_or(self.now_ms)
    }

    /// Jumps to the next deadline and returns every cadence due at it.
    pub fn step(&mut self) -> (u64, Vec<Cadence>) {
        let at = self.next_due_ms();
        self.now_ms = at;
        let due: Vec<Cadence> = Cadence::ALL
            .into_iter()
            .filter(|c| self.next_due[c.index()] == at)
            .collect();
        for cadence in &due {
            self.next_due[cadence.index()] += self.periods[cadence.index()];
        }
        (at, due)
    }
}
