//! Time-of-day arithmetic.
//!
//! Times here are bare wall-clock times with no date or timezone attached;
//! anything that runs past midnight is reported as a day offset alongside the
//! wrapped time.

use chrono::prelude::*;
use chrono::{Duration, ParseError};

const SECS_PER_DAY: i64 = 86_400;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Parses a 24-hour `HH:MM` clock time.
///
/// Surrounding whitespace is ignored; seconds are not accepted.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
}

/// Whole minutes elapsed since midnight. Seconds are discarded.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// Adds a (non-negative) number of fractional hours to a clock time.
///
/// Whole days are split off first; what's left is rounded to the nearest
/// millisecond before being added. Returns the wrapped clock time, and the
/// number of midnights crossed on the way there.
///
/// Day counts are exact up to 2^53 days.
pub fn add_hours_wrapping(start: NaiveTime, hours: f64) -> (NaiveTime, u64) {
    let whole_days = (hours / 24.0).floor().max(0.0);
    let rest = hours - whole_days * 24.0;
    let millis = (rest * MILLIS_PER_HOUR).round() as i64;
    let (time, overflow_secs) = start.overflowing_add_signed(Duration::milliseconds(millis));
    let days = whole_days as u64;
    let extra = overflow_secs / SECS_PER_DAY;
    let days = if extra < 0 {
        days.saturating_sub(extra.unsigned_abs())
    }
    else {
        days + extra as u64
    };
    (time, days)
}
