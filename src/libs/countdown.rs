//! Countdown to a zone's target time.
//!
//! The target is always interpreted against the calendar date of `now`: once the
//! deadline has passed the countdown reads `00:00:00`, it never goes negative and
//! never rolls over to tomorrow.
//!
//! ## Format
//!
//! `HH:MM:SS` with each part zero-padded to two digits. Hours are unbounded,
//! so a value of 100 hours renders as `100:00:00`.

use crate::libs::zone::TargetTime;
use chrono::NaiveDateTime;
use std::fmt;

pub const ZERO_REMAINING: &str = "00:00:00";

/// Whole seconds left until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Remaining {
    seconds: u64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining { seconds: 0 };

    pub fn from_seconds(seconds: u64) -> Self {
        Remaining { seconds }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0
    }

    /// Parses `HH:MM:SS` as `H*3600 + M*60 + S`.
    ///
    /// Parts are folded base 60 from the left, so `MM:SS` and a bare seconds
    /// value are accepted as well. Returns `None` on any non-numeric part.
    pub fn parse(text: &str) -> Option<Self> {
        text.split(':')
            .try_fold(0u64, |acc, part| {
                let value: u64 = part.trim().parse().ok()?;
                acc.checked_mul(60)?.checked_add(value)
            })
            .map(Remaining::from_seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Time left from `now` until `target` on the same calendar day, clamped at zero.
pub fn countdown(target: TargetTime, now: NaiveDateTime) -> Remaining {
    let deadline = now.date().and_time(target.as_naive_time());
    let diff = deadline - now;
    if diff < chrono::Duration::zero() {
        return Remaining::ZERO;
    }
    Remaining::from_seconds(diff.num_seconds().max(0) as u64)
}

/// Seconds value of a stored `HH:MM:SS` string; unparsable text counts as zero.
pub fn remaining_seconds(text: &str) -> u64 {
    Remaining::parse(text).map(|r| r.seconds()).unwrap_or(0)
}
