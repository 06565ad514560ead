//! Events
//!
//! Queueing of advisory events and the JSONL event log.

pub mod logger;

pub use logger::{read_log, EventLogger};

use std::collections::VecDeque;

use nightwatch_events::{generate_event_id, EventKind, NightEvent, NightTimestamp};

/// Undrained events kept before the oldest are dropped
pub const EVENT_QUEUE_CAPACITY: usize = 4096;

/// Events emitted since the last drain
///
/// Bounded: once `capacity` events are waiting, each new one pushes out the
/// oldest. Ids keep counting, so a gap in ids marks dropped events.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<NightEvent>,
    capacity: usize,
    next_event_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity: capacity.max(1),
            next_event_id: 1,
        }
    }

    /// Stamps `kind` with the next event id and queues it.
    pub fn push(&mut self, timestamp: NightTimestamp, kind: EventKind) {
        let id = generate_event_id(self.next_event_id);
        self.next_event_id += 1;
        if self.events.len() == self.capacity {
            if let Some(dropped) = self.events.pop_front() {
                tracing::trace!("Event queue full, dropping {}", dropped.event_id);
            }
        }
        self.events.push_back(NightEvent::new(id, timestamp, kind));
    }

    pub fn drain(&mut self) -> Vec<NightEvent> {
        self.events.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NightEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
