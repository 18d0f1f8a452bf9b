//! A calculator session, as driven by a form-style UI.
//!
//! The session owns the current inputs and, at most, one result. Editing
//! any input throws the result away, so whatever `result()` returns always
//! describes the inputs as they currently stand.

use chrono::NaiveTime;
use log::*;

use crate::calc::calculate_meeting;
use crate::config::Config;
use crate::errors::*;
use crate::types::*;
use crate::util::MeetingSummary;

pub struct MeetingCalculator {
    input: ScenarioInput,
    result: Option<MeetingResult>,
    cfg: Config
}
impl MeetingCalculator {
    /// Starts a session with the configured initial scenario.
    pub fn new(cfg: &Config) -> Self {
        Self::with_input(cfg.initial_scenario(), cfg)
    }
    pub fn with_input(input: ScenarioInput, cfg: &Config) -> Self {
        Self {
            input,
            result: None,
            cfg: cfg.clone()
        }
    }
    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }
    fn invalidate(&mut self) {
        if self.result.take().is_some() {
            trace!("Input changed; discarding previous result");
        }
    }
    /// Sets the distance between the two origins, in km.
    pub fn set_distance(&mut self, km: f64) {
        trace!("Distance set to {} km", km);
        self.input.distance = km;
        self.invalidate();
    }
    /// Sets a train's speed, in km/h.
    pub fn set_speed(&mut self, side: Side, kmh: f64) {
        trace!("Train {} speed set to {} km/h", side, kmh);
        self.input.train_mut(side).speed = kmh;
        self.invalidate();
    }
    pub fn set_departure(&mut self, side: Side, time: NaiveTime) {
        trace!("Train {} departure set to {}", side, time);
        self.input.train_mut(side).departure = time;
        self.invalidate();
    }
    /// Sets a train's departure from an `HH:MM` string.
    ///
    /// If the string doesn't parse, nothing changes (and any existing result
    /// is kept).
    pub fn set_departure_str(&mut self, side: Side, time: &str) -> TreffenResult<()> {
        let time = parse_departure(time)?;
        self.set_departure(side, time);
        Ok(())
    }
    /// Validates the current inputs, and calculates a fresh result from them.
    ///
    /// On error, no result is kept.
    pub fn calculate(&mut self) -> TreffenResult<&MeetingResult> {
        self.result = None;
        self.input.validate()?;
        for &side in &[Side::A, Side::B] {
            self.cfg.check_speed(side, self.input.train(side).speed)?;
        }
        let result = calculate_meeting(&self.input);
        match result {
            MeetingResult::Meet { time_to_meet_hours, meeting_clock_time, day_offset, meeting_point_from_a, .. } => {
                info!("Trains meet after {:.3}h at {} (+{}d), {:.2} km from A",
                      time_to_meet_hours, meeting_clock_time, day_offset, meeting_point_from_a);
            },
            MeetingResult::NoMeet { completed_by, .. } => {
                info!("Trains don't meet: {} completes the route first", completed_by);
            }
        }
        Ok(self.result.get_or_insert(result))
    }
    /// The result of the last calculation, unless inputs have changed since.
    pub fn result(&self) -> Option<&MeetingResult> {
        self.result.as_ref()
    }
    /// The current result, formatted for display.
    pub fn summary(&self) -> Option<MeetingSummary> {
        self.result.as_ref()
            .map(|r| MeetingSummary::new(&self.input, r))
    }
}
