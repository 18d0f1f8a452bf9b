//! Error handling.
//!
//! Trains failing to meet is *not* an error; see `MeetingResult::NoMeet`.
//! Everything here is about inputs that don't make sense.

use failure_derive::Fail;
use chrono::ParseError;

use crate::types::Side;

/// Error that could occur when validating or calculating a scenario.
#[derive(Fail, Debug)]
pub enum TreffenError {
    /// A departure time wasn't a 24-hour `HH:MM` clock time.
    #[fail(display = "invalid departure time {:?}: {}", _0, _1)]
    InvalidTime(String, ParseError),
    /// The distance between the two origins is zero, negative, or not a number.
    #[fail(display = "distance must be a positive number of km, got {}", _0)]
    InvalidDistance(f64),
    /// A train's speed is zero, negative, or not a number.
    #[fail(display = "speed of train {} must be a positive number of km/h, got {}", _0, _1)]
    InvalidSpeed(Side, f64),
    /// The trains would take longer than `MAX_JOURNEY_HOURS` to meet.
    #[fail(display = "trains would take {} hours to meet, which is too long to track", _0)]
    JourneyTooLong(f64),
    /// A train's speed is outside the range the calculator was configured with.
    #[fail(display = "speed of train {} must be between {} and {} km/h, got {}", side, min, max, speed)]
    SpeedOutOfRange {
        side: Side,
        speed: f64,
        min: f64,
        max: f64
    }
}

pub type TreffenResult<T> = ::std::result::Result<T, TreffenError>;
