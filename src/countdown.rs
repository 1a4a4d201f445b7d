//! Countdown to a fixed instant.
//!
//! All instants are milliseconds since the Unix epoch. The calculator is a
//! pure function; [`Countdown`] adds the once-per-second cadence and stops
//! for good on the first expired reading.

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

pub const MS_PER_SECOND: i64 = 1000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Recompute cadence
pub const TICK_INTERVAL_MS: i64 = 1000;

/// Remaining duration broken into display units.
///
/// Field order gives the derived ordering days > hours > minutes > seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Values in display order
    pub fn fields(&self) -> [i64; 4] {
        [self.days, self.hours, self.minutes, self.seconds]
    }
}

/// One observation of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownReading {
    pub time_left: TimeLeft,
    /// The target has been reached; no further recomputation is needed
    pub expired: bool,
}

impl CountdownReading {
    pub const EXPIRED: CountdownReading = CountdownReading {
        time_left: TimeLeft::ZERO,
        expired: true,
    };
}

/// Time left until `target_ms`, observed at `now_ms`.
pub fn remaining(target_ms: i64, now_ms: i64) -> CountdownReading {
    if target_ms <= now_ms {
        return CountdownReading::EXPIRED;
    }

    // Saturates at the largest representable span
    let delta = target_ms.saturating_sub(now_ms);
    CountdownReading {
        time_left: TimeLeft {
            days: delta / MS_PER_DAY,
            hours: (delta % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (delta % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (delta % MS_PER_MINUTE) / MS_PER_SECOND,
        },
        expired: false,
    }
}

/// Two-digit zero-padded display of one unit
pub fn format_unit(value: i64) -> String {
    format!("{:02}", value)
}

/// Parses a countdown target.
///
/// Accepts RFC 3339 (with offset) or a naive `YYYY-MM-DDTHH:MM[:SS]` taken
/// as local time.
pub fn parse_target(text: &str) -> anyhow::Result<i64> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis());
    }

    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .with_context(|| format!("Invalid countdown target '{}'", text))?;

    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Countdown target '{}' does not exist in local time", text))?;
    Ok(local.timestamp_millis())
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Countdown with a fixed recompute cadence.
#[derive(Debug, Clone)]
pub struct Countdown {
    target_ms: Option<i64>,
    next_tick_ms: Option<i64>,
    reading: CountdownReading,
}

impl Countdown {
    /// Creates a running countdown. The first call to [`Self::tick`] computes
    /// immediately.
    pub fn new(target_ms: i64) -> Self {
        Self {
            target_ms: Some(target_ms),
            next_tick_ms: Some(i64::MIN),
            reading: CountdownReading {
                time_left: TimeLeft::ZERO,
                expired: false,
            },
        }
    }

    /// Creates a countdown from a configured target string.
    ///
    /// An unparsable target yields a stopped countdown showing zero.
    pub fn from_config(target: &str) -> Self {
        match parse_target(target) {
            Ok(target_ms) => Self::new(target_ms),
            Err(err) => {
                tracing::warn!("{:#}", err);
                Self {
                    target_ms: None,
                    next_tick_ms: None,
                    reading: CountdownReading::EXPIRED,
                }
            }
        }
    }

    pub fn target_ms(&self) -> Option<i64> {
        self.target_ms
    }

    /// Latest reading
    pub fn reading(&self) -> CountdownReading {
        self.reading
    }

    pub fn is_running(&self) -> bool {
        self.next_tick_ms.is_some()
    }

    /// Recomputes if a tick is due at `now_ms`.
    ///
    /// Returns the new reading when one was computed. Missed ticks are not
    /// replayed: at most one computation happens per call, and the next one
    /// is scheduled on the cadence grid after `now_ms`.
    pub fn tick(&mut self, now_ms: i64) -> Option<CountdownReading> {
        let due = self.next_tick_ms?;
        let target_ms = self.target_ms?;
        if now_ms < due {
            return None;
        }

        self.reading = remaining(target_ms, now_ms);
        if self.reading.expired {
            tracing::info!("Countdown reached its target, stopping timer");
            self.next_tick_ms = None;
        } else if due == i64::MIN {
            self.next_tick_ms = Some(now_ms + TICK_INTERVAL_MS);
        } else {
            let missed = (now_ms - due) / TICK_INTERVAL_MS;
            self.next_tick_ms = Some(due + (missed + 1) * TICK_INTERVAL_MS);
        }
        Some(self.reading)
    }

    /// Milliseconds until the next scheduled tick, if still running
    pub fn millis_until_next_tick(&self, now_ms: i64) -> Option<u64> {
        let due = self.next_tick_ms?;
        Some(due.saturating_sub(now_ms).max(0) as u64)
    }
}
