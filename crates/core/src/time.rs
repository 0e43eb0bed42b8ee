//! Clock-free time handling for the booking day.
//!
//! Appointment times are minutes since midnight, never wall-clock dates, so the
//! arithmetic is immune to timezone and DST edge cases. Ranges are half-open
//! `[start, end)` minute intervals: back-to-back appointments do not conflict.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GroomError;

/// A time of day as minutes since midnight, parsed from and formatted as "HH:mm".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from raw minutes since midnight without validation.
    /// Values past 24:00 are representable so interval ends can pass midnight.
    pub const fn from_minutes(minutes: u16) -> Self {
        TimeOfDay(minutes)
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Result<Self, GroomError> {
        if hours >= 24 || minutes >= 60 {
            return Err(GroomError::Validation(format!(
                "Invalid time of day: {hours:02}:{minutes:02}"
            )));
        }
        Ok(TimeOfDay(hours * 60 + minutes))
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub fn add_minutes(self, minutes: u32) -> TimeOfDay {
        TimeOfDay(self.0.saturating_add(minutes.min(u16::MAX as u32) as u16))
    }

    /// The half-open interval starting here and running for `duration_minutes`.
    pub fn span(self, duration_minutes: u32) -> TimeRange {
        TimeRange {
            start: self,
            end: self.add_minutes(duration_minutes),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = GroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GroomError::Validation(format!("Invalid time of day: {s}"));

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        TimeOfDay::from_hm(hours, minutes)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e: GroomError| D::Error::custom(e.to_string()))
    }
}

/// Half-open `[start, end)` minute interval within one working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Two half-open intervals overlap iff `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}
