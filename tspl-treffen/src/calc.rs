//! The meeting-time calculation itself.
//!
//! Both trains run toward each other on the same line at constant speed. If
//! they leave at different times, the earlier one runs alone for a while (its
//! head start), after which the gap closes at the sum of both speeds.

use chrono::NaiveTime;
use log::*;
use std::cmp::Ordering;
use tspl_util::time::{add_hours_wrapping, minutes_since_midnight};

use crate::types::*;

/// How long each train spends moving before the meeting, in hours.
struct MotionTimes {
    time_to_meet: f64,
    train_a: f64,
    train_b: f64
}

/// Works out how long the gap takes to close, given that `leader` set off
/// `head_start` hours before the other train.
///
/// Returns `None` if the leader covers the whole distance during its head
/// start.
fn close_gap(scenario: &ScenarioInput, leader: Side, head_start: f64) -> Option<MotionTimes> {
    let closing_speed = scenario.train_a.speed + scenario.train_b.speed;
    let covered_alone = scenario.train(leader).speed * head_start;
    if covered_alone >= scenario.distance {
        return None;
    }
    let after_follower_starts = (scenario.distance - covered_alone) / closing_speed;
    let time_to_meet = head_start + after_follower_starts;
    let (train_a, train_b) = match leader {
        Side::A => (time_to_meet, after_follower_starts),
        Side::B => (after_follower_starts, time_to_meet)
    };
    Some(MotionTimes { time_to_meet, train_a, train_b })
}

/// Calculates where and when the two trains in `scenario` meet.
///
/// The scenario is assumed to be valid (see `ScenarioInput::validate`);
/// use `ScenarioInput::meet` to validate and calculate in one go.
pub fn calculate_meeting(scenario: &ScenarioInput) -> MeetingResult {
    let dep_a = minutes_since_midnight(scenario.train_a.departure);
    let dep_b = minutes_since_midnight(scenario.train_b.departure);
    debug!("Calculating meeting over {} km: A departs {} at {} km/h, B departs {} at {} km/h",
           scenario.distance,
           scenario.train_a.departure, scenario.train_a.speed,
           scenario.train_b.departure, scenario.train_b.speed);

    let (leader, head_start) = match dep_a.cmp(&dep_b) {
        Ordering::Equal => (None, 0.0),
        Ordering::Less => (Some(Side::A), f64::from(dep_b - dep_a) / 60.0),
        Ordering::Greater => (Some(Side::B), f64::from(dep_a - dep_b) / 60.0)
    };
    let motion = match leader {
        None => {
            let t = scenario.distance / (scenario.train_a.speed + scenario.train_b.speed);
            MotionTimes { time_to_meet: t, train_a: t, train_b: t }
        },
        Some(leader) => match close_gap(scenario, leader, head_start) {
            Some(m) => m,
            None => {
                debug!("Train {} completes the route during its {}h head start", leader, head_start);
                let (train_a_distance, train_b_distance) = match leader {
                    Side::A => (scenario.distance, 0.0),
                    Side::B => (0.0, scenario.distance)
                };
                return MeetingResult::NoMeet {
                    train_a_distance,
                    train_b_distance,
                    completed_by: leader
                };
            }
        }
    };

    // Midnight, plus the earlier departure, plus the time taken to meet.
    let from_midnight = f64::from(dep_a.min(dep_b)) / 60.0 + motion.time_to_meet;
    let (meeting_clock_time, day_offset) = add_hours_wrapping(NaiveTime::default(), from_midnight);
    let train_a_distance = scenario.train_a.speed * motion.train_a;
    let train_b_distance = scenario.train_b.speed * motion.train_b;
    MeetingResult::Meet {
        time_to_meet_hours: motion.time_to_meet,
        meeting_clock_time,
        day_offset,
        train_a_distance,
        train_b_distance,
        meeting_point_from_a: train_a_distance
    }
}
