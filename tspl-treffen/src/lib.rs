//! Works out when and where two trains heading toward each other meet.
//!
//! Give it the length of line between the two origins, plus a departure time
//! and a speed for each train, and it tells you how long until they pass each
//! other, what the clock says when they do, and how far along the line from
//! train A's origin that happens. If one train finishes the whole route before
//! the other even sets off, you get `MeetingResult::NoMeet` instead.
//!
//! Distances are in km, speeds in km/h, and times are plain 24-hour clock
//! times with no timezone.
//!
//! ```
//! use tspl_treffen::{ScenarioInput, TrainInput};
//!
//! let scenario = ScenarioInput::new(200.0,
//!                                   TrainInput::parse("08:00", 80.0).unwrap(),
//!                                   TrainInput::parse("09:00", 100.0).unwrap());
//! let result = scenario.meet().unwrap();
//! assert!(result.is_meet());
//! ```

pub mod errors;
pub mod config;
pub mod types;
pub mod calc;
pub mod util;
pub mod session;

pub use crate::calc::calculate_meeting;
pub use crate::config::Config;
pub use crate::errors::{TreffenError, TreffenResult};
pub use crate::session::MeetingCalculator;
pub use crate::types::{MeetingResult, ScenarioInput, Side, TrainInput};
pub use crate::util::{format_hours, MeetingSummary};
