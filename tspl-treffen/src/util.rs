//! Display formatting for calculation results.

use chrono::prelude::*;
use std::fmt;

use crate::types::*;

/// Formats a duration in hours as e.g. `1h 7m`, or `N/A` if there isn't one.
///
/// The minutes are rounded independently of the hours, so a value just shy of
/// a whole hour renders as `Nh 60m`.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        None => "N/A".into(),
        Some(hours) => {
            let h = hours.floor();
            let m = ((hours - h) * 60.0).round();
            format!("{}h {}m", h as i64, m as i64)
        }
    }
}

/// Formats a distance in km, to two decimal places.
pub fn format_km(km: f64) -> String {
    format!("{:.2} km", km)
}

/// Formats a clock time as `HH:MM`, noting how many days later it is if it
/// doesn't fall on the starting day.
pub fn format_clock(time: &NaiveTime, day_offset: u64) -> String {
    match day_offset {
        0 => time.format("%H:%M").to_string(),
        n => format!("{} (+{})", time.format("%H:%M"), n)
    }
}

/// What one train did before the meeting, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSummary {
    pub side: Side,
    pub distance: String,
    pub time_in_motion: String
}

/// A `MeetingResult`, with everything pre-formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingSummary {
    pub meets: bool,
    pub time_to_meet: String,
    pub meeting_clock_time: String,
    pub meeting_point: String,
    pub train_a: TrainSummary,
    pub train_b: TrainSummary,
    /// Which train completed the route early, if the trains don't meet.
    pub completed_by: Option<Side>
}
impl MeetingSummary {
    pub fn new(scenario: &ScenarioInput, result: &MeetingResult) -> Self {
        let train = |side: Side| {
            let distance = result.train_distance(side);
            TrainSummary {
                side,
                distance: format_km(distance),
                time_in_motion: format_hours(Some(distance / scenario.train(side).speed))
            }
        };
        let (meeting_clock_time, completed_by) = match *result {
            MeetingResult::Meet { ref meeting_clock_time, day_offset, .. } => {
                (format_clock(meeting_clock_time, day_offset), None)
            },
            MeetingResult::NoMeet { completed_by, .. } => ("N/A".into(), Some(completed_by))
        };
        Self {
            meets: result.is_meet(),
            time_to_meet: format_hours(result.time_to_meet_hours()),
            meeting_clock_time,
            meeting_point: result.meeting_point_from_a()
                .map(format_km)
                .unwrap_or_else(|| "N/A".into()),
            train_a: train(Side::A),
            train_b: train(Side::B),
            completed_by
        }
    }
}
impl fmt::Display for MeetingSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(side) = self.completed_by {
            writeln!(f, "The trains will not meet.")?;
            return write!(f, "Train {} completes the whole route before train {} departs.",
                          side, side.other());
        }
        writeln!(f, "Time until meeting: {}", self.time_to_meet)?;
        writeln!(f, "Meeting time: {}", self.meeting_clock_time)?;
        writeln!(f, "Meeting point: {} from A", self.meeting_point)?;
        for t in &[&self.train_a, &self.train_b] {
            writeln!(f, "Train {}: {} covered, {} in motion", t.side, t.distance, t.time_in_motion)?;
        }
        Ok(())
    }
}
