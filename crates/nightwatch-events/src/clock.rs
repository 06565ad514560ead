//! Night Clock Types
//!
//! In-game time is tracked as minutes elapsed since midnight and rendered as a
//! 12-hour wall clock.
//!
//! # Example
//!
//! ```
//! use nightwatch_events::{ClockTime, NightTimestamp};
//!
//! let time = ClockTime::from_elapsed(65);
//! assert_eq!(time.to_string(), "1:05 AM");
//!
//! let ts = NightTimestamp::new(2, 360);
//! assert_eq!(ts.clock.to_string(), "6:00 AM");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of one night in in-game minutes (12:00 AM to 6:00 AM).
pub const NIGHT_LENGTH_MINUTES: u32 = 360;

const MINUTES_PER_HOUR: u32 = 60;
const HOURS_PER_DAY: u32 = 24;

/// Half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Wall-clock reading derived from elapsed minutes.
///
/// Serializes to strings like "12:00 AM" or "3:07 AM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// Hour on the 12-hour dial, 1..=12.
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl ClockTime {
    /// Creates the clock reading for `elapsed` minutes after midnight.
    ///
    /// Wraps every 24 hours.
    pub fn from_elapsed(elapsed: u32) -> Self {
        let hour24 = (elapsed / MINUTES_PER_HOUR) % HOURS_PER_DAY;
        let minute = (elapsed % MINUTES_PER_HOUR) as u8;
        let meridiem = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h as u8,
        };
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// The reading at the start of every night.
    pub fn midnight() -> Self {
        Self::from_elapsed(0)
    }

    /// Minutes since midnight for this reading, in `0..1440`.
    pub fn minutes_since_midnight(&self) -> u32 {
        let hour = u32::from(self.hour % 12);
        let hour24 = match self.meridiem {
            Meridiem::Am => hour,
            Meridiem::Pm => hour + 12,
        };
        hour24 * MINUTES_PER_HOUR + u32::from(self.minute)
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::midnight()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Error type for parsing ClockTime from strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseClockError {
    InvalidFormat(String),
    InvalidHour(String),
    InvalidMinute(String),
    InvalidMeridiem(String),
}

impl fmt::Display for ParseClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseClockError::InvalidFormat(s) => {
                write!(f, "invalid clock format: '{}', expected 'H:MM AM'", s)
            }
            ParseClockError::InvalidHour(s) => write!(f, "invalid hour: '{}'", s),
            ParseClockError::InvalidMinute(s) => write!(f, "invalid minute: '{}'", s),
            ParseClockError::InvalidMeridiem(s) => write!(f, "invalid meridiem: '{}'", s),
        }
    }
}

impl std::error::Error for ParseClockError {}

impl FromStr for ClockTime {
    type Err = ParseClockError;

    /// Parses a ClockTime from a string like "3:07 AM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (time, meridiem) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| ParseClockError::InvalidFormat(s.to_string()))?;
        let (hour, minute) = time
            .split_once(':')
            .ok_or_else(|| ParseClockError::InvalidFormat(s.to_string()))?;

        let hour = hour
            .parse::<u8>()
            .ok()
            .filter(|h| (1..=12).contains(h))
            .ok_or_else(|| ParseClockError::InvalidHour(hour.to_string()))?;

        if minute.len() != 2 {
            return Err(ParseClockError::InvalidMinute(minute.to_string()));
        }
        let minute = minute
            .parse::<u8>()
            .ok()
            .filter(|m| *m < 60)
            .ok_or_else(|| ParseClockError::InvalidMinute(minute.to_string()))?;

        let meridiem = match meridiem.trim().to_uppercase().as_str() {
            "AM" => Meridiem::Am,
            "PM" => Meridiem::Pm,
            other => return Err(ParseClockError::InvalidMeridiem(other.to_string())),
        };

        Ok(ClockTime {
            hour,
            minute,
            meridiem,
        })
    }
}

// Serialize as the display string
impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A point in simulation time: which night, and how far into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightTimestamp {
    pub night: u32,
    /// Minutes elapsed since 12:00 AM.
    pub minute: u32,
    /// Wall-clock rendering of `minute`.
    pub clock: ClockTime,
}

impl NightTimestamp {
    pub fn new(night: u32, minute: u32) -> Self {
        Self {
            night,
            minute,
            clock: ClockTime::from_elapsed(minute),
        }
    }
}
