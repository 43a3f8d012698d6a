//! Clock abstraction and time-relative parameters

use chrono::{DateTime, TimeZone, Utc};

use crate::operation::ValidationError;

/// Source of the current time
///
/// The session owns one of these so that time-relative validation
/// ([`EndTimestamp`]) can be tested against a fixed instant. Clocks are
/// `Send + Sync` so a session can be handed to another thread.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Clock frozen at the given Unix time, `None` if out of range
    pub fn at_timestamp(seconds: i64) -> Option<Self> {
        Utc.timestamp_opt(seconds, 0).single().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// End of a timed thermostat override (boost, window open)
///
/// Either `0`, which cancels the override, or a Unix time no more than 24
/// hours ahead of the moment of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndTimestamp(i64);

impl EndTimestamp {
    /// Longest override the gateway accepts, in seconds
    pub const MAX_AHEAD_SECS: i64 = 86_400;

    /// The value that ends an active override immediately
    pub fn cancel() -> Self {
        Self(0)
    }

    /// Validate `value` against the given current Unix time
    pub fn validate(value: i64, now: i64) -> Result<Self, ValidationError> {
        let latest = now.saturating_add(Self::MAX_AHEAD_SECS);
        if value == 0 || (now..=latest).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::range_error("endtimestamp", now, latest, value))
        }
    }

    /// Validate `value` against `clock`
    pub fn new(value: i64, clock: &dyn Clock) -> Result<Self, ValidationError> {
        Self::validate(value, clock.now().timestamp())
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_cancel(self) -> bool {
        self.0 == 0
    }
}
