//! Scenario and result types.

use chrono::prelude::*;
use serde_derive::{Serialize, Deserialize};
use std::fmt;
use tspl_util::time::parse_hhmm;

use crate::calc::calculate_meeting;
use crate::errors::*;

/// One of the two trains. Train A starts from the origin that the meeting
/// point is measured from; train B starts from the other end of the line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B
}
impl Side {
    /// The train at the other end of the line.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A
        }
    }
}
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B")
        }
    }
}

/// Parses a departure time, keeping hold of the offending input on failure.
pub fn parse_departure(s: &str) -> TreffenResult<NaiveTime> {
    parse_hhmm(s).map_err(|e| TreffenError::InvalidTime(s.into(), e))
}

/// (De)serializes clock times as `HH:MM` strings.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format("%H:%M").to_string())
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        tspl_util::time::parse_hhmm(&s)
            .map_err(|e| D::Error::custom(format!("invalid time {:?}: {}", s, e)))
    }
}

/// Departure information for one train.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainInput {
    /// Time of departure from this train's origin (24-hour clock).
    #[serde(with = "hhmm")]
    pub departure: NaiveTime,
    /// Speed, in km/h.
    pub speed: f64
}
impl TrainInput {
    pub fn new(departure: NaiveTime, speed: f64) -> Self {
        Self { departure, speed }
    }
    /// Makes a `TrainInput` from an `HH:MM` departure string.
    pub fn parse(departure: &str, speed: f64) -> TreffenResult<Self> {
        Ok(Self::new(parse_departure(departure)?, speed))
    }
}

/// Longest journey, in hours, that `validate` accepts. Beyond this, day
/// counts stop being exact.
pub const MAX_JOURNEY_HOURS: f64 = 9_007_199_254_740_992.0;

/// Everything needed to work out where two trains meet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    /// Distance between the two origins, in km.
    pub distance: f64,
    pub train_a: TrainInput,
    pub train_b: TrainInput
}
impl ScenarioInput {
    pub fn new(distance: f64, train_a: TrainInput, train_b: TrainInput) -> Self {
        Self { distance, train_a, train_b }
    }
    pub fn train(&self, side: Side) -> &TrainInput {
        match side {
            Side::A => &self.train_a,
            Side::B => &self.train_b
        }
    }
    pub fn train_mut(&mut self, side: Side) -> &mut TrainInput {
        match side {
            Side::A => &mut self.train_a,
            Side::B => &mut self.train_b
        }
    }
    /// The same scenario, viewed from the other end of the line.
    pub fn swapped(&self) -> ScenarioInput {
        Self::new(self.distance, self.train_b.clone(), self.train_a.clone())
    }
    /// Checks that the distance and both speeds are finite and positive, and
    /// that the trains would meet within `MAX_JOURNEY_HOURS`.
    pub fn validate(&self) -> TreffenResult<()> {
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(TreffenError::InvalidDistance(self.distance));
        }
        for &side in &[Side::A, Side::B] {
            let speed = self.train(side).speed;
            if !(speed.is_finite() && speed > 0.0) {
                return Err(TreffenError::InvalidSpeed(side, speed));
            }
        }
        let closing_hours = self.distance / (self.train_a.speed + self.train_b.speed);
        if closing_hours > MAX_JOURNEY_HOURS {
            return Err(TreffenError::JourneyTooLong(closing_hours));
        }
        Ok(())
    }
    /// Validates this scenario, then works out where the trains meet.
    pub fn meet(&self) -> TreffenResult<MeetingResult> {
        self.validate()?;
        Ok(calculate_meeting(self))
    }
}

/// The outcome of a meeting calculation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind")]
pub enum MeetingResult {
    /// The trains pass each other somewhere along the line.
    Meet {
        /// Hours from the earlier of the two departures until the meeting.
        time_to_meet_hours: f64,
        /// Clock time of the meeting, wrapped to 24 hours.
        #[serde(with = "hhmm")]
        meeting_clock_time: NaiveTime,
        /// How many midnights lie between the earlier departure and the meeting.
        day_offset: u64,
        /// Distance covered by train A, in km.
        train_a_distance: f64,
        /// Distance covered by train B, in km.
        train_b_distance: f64,
        /// Distance from train A's origin to the meeting point, in km.
        meeting_point_from_a: f64
    },
    /// One train reached the far end before the other one even set off.
    NoMeet {
        train_a_distance: f64,
        train_b_distance: f64,
        /// The train that completed the route.
        completed_by: Side
    }
}
impl MeetingResult {
    pub fn is_meet(&self) -> bool {
        match *self {
            MeetingResult::Meet { .. } => true,
            MeetingResult::NoMeet { .. } => false
        }
    }
    pub fn time_to_meet_hours(&self) -> Option<f64> {
        match *self {
            MeetingResult::Meet { time_to_meet_hours, .. } => Some(time_to_meet_hours),
            MeetingResult::NoMeet { .. } => None
        }
    }
    pub fn meeting_point_from_a(&self) -> Option<f64> {
        match *self {
            MeetingResult::Meet { meeting_point_from_a, .. } => Some(meeting_point_from_a),
            MeetingResult::NoMeet { .. } => None
        }
    }
    /// Distance covered by the given train, in km.
    pub fn train_distance(&self, side: Side) -> f64 {
        let (a, b) = match *self {
            MeetingResult::Meet { train_a_distance, train_b_distance, .. } => (train_a_distance, train_b_distance),
            MeetingResult::NoMeet { train_a_distance, train_b_distance, .. } => (train_a_distance, train_b_distance)
        };
        match side {
            Side::A => a,
            Side::B => b
        }
    }
}
