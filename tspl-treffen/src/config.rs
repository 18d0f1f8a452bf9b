//! Configuration!

use chrono::NaiveTime;
use serde_derive::Deserialize;
use tspl_util::{ConfigExt, crate_name};

use crate::errors::*;
use crate::types::*;

/// `tspl-treffen` configuration.
///
/// Every field is optional; the defaults describe 200 km of line, with
/// both trains leaving at 08:00 (A at 80 km/h, B at 100 km/h), and speeds
/// limited to between 10 and 300 km/h.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Initial distance between the two origins, in km.
    pub distance: f64,
    /// Initial settings for train A.
    pub train_a: TrainInput,
    /// Initial settings for train B.
    pub train_b: TrainInput,
    /// Slowest speed a calculator will accept, in km/h.
    pub min_speed: f64,
    /// Fastest speed a calculator will accept, in km/h.
    pub max_speed: f64
}

fn default_departure() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distance: 200.0,
            train_a: TrainInput::new(default_departure(), 80.0),
            train_b: TrainInput::new(default_departure(), 100.0),
            min_speed: 10.0,
            max_speed: 300.0
        }
    }
}

impl ConfigExt for Config {
    fn crate_name() -> &'static str {
        crate_name!()
    }
}

impl Config {
    /// The scenario a freshly created calculator starts out with.
    pub fn initial_scenario(&self) -> ScenarioInput {
        ScenarioInput::new(self.distance, self.train_a.clone(), self.train_b.clone())
    }
    /// Checks that `speed` lies within the configured range.
    pub fn check_speed(&self, side: Side, speed: f64) -> TreffenResult<()> {
        if speed < self.min_speed || speed > self.max_speed {
            return Err(TreffenError::SpeedOutOfRange {
                side,
                speed,
                min: self.min_speed,
                max: self.max_speed
            });
        }
        Ok(())
    }
}
