//! Event Log
//!
//! Night events as JSON lines, one event per line, in emission order. A log
//! can be read back with [`read_log`] to replay or compare runs.

use nightwatch_events::NightEvent;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// JSONL sink for night events. A logger without a file only counts.
pub struct EventLogger {
    out: Option<BufWriter<File>>,
    written: u64,
    current_night: Option<u32>,
}

impl EventLogger {
    /// Starts a fresh log at `path`, replacing any earlier run.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            written: 0,
            current_night: None,
        })
    }

    /// A logger that drops every event.
    pub fn null() -> Self {
        Self {
            out: None,
            written: 0,
            current_night: None,
        }
    }

    /// Events seen so far, written or not.
    pub fn event_count(&self) -> u64 {
        self.written
    }

    pub fn log(&mut self, event: &NightEvent) -> io::Result<()> {
        let night = event.timestamp.night;
        if self.current_night != Some(night) {
            tracing::trace!("Event log entering night {}", night);
            self.current_night = Some(night);
        }
        self.written += 1;

        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        serde_json::to_writer(&mut *out, event)?;
        out.write_all(b"\n")
    }

    pub fn log_batch(&mut self, events: &[NightEvent]) -> io::Result<()> {
        events.iter().try_for_each(|event| self.log(event))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Event log lost its tail: {}", e);
        }
    }
}

/// Loads a JSONL event log. Blank lines are skipped.
pub fn read_log(path: impl AsRef<Path>) -> io::Result<Vec<NightEvent>> {
    let reader = BufReader::new(File::open(path)?);
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(NightEvent::from_jsonl(&line)?);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightwatch_events::{generate_event_id, EventKind, NightTimestamp, Side};

    fn threat_event(seq: u64) -> NightEvent {
        NightEvent::new(
            generate_event_id(seq),
            NightTimestamp::new(2, 181),
            EventKind::ThreatTriggered {
                agent: "Bonnie".into(),
                side: Side::Left,
            },
        )
    }

    #[test]
    fn test_log_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut logger = EventLogger::create(&path).unwrap();
        logger.log_batch(&[threat_event(1), threat_event(2)]).unwrap();
        logger.flush().unwrap();

        let events = read_log(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_id, "evt_00000002");
        assert_eq!(events[1].timestamp.clock.to_string(), "3:01 AM");
    }

    #[test]
    fn test_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        std::fs::write(&path, "stale\n").unwrap();

        let mut logger = EventLogger::create(&path).unwrap();
        logger.log(&threat_event(1)).unwrap();
        drop(logger);

        assert_eq!(read_log(&path).unwrap(), vec![threat_event(1)]);
    }

    #[test]
    fn test_bad_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        std::fs::write(&path, "{\"event_id\": 3}\n").unwrap();
        assert!(read_log(&path).is_err());
    }

    #[test]
    fn test_null_logger_counts() {
        let mut logger = EventLogger::null();
        logger.log(&threat_event(1)).unwrap();
        logger.log(&threat_event(2)).unwrap();
        assert_eq!(logger.event_count(), 2);
        assert!(logger.flush().is_ok());
    }
}
