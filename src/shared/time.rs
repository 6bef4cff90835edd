use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_HOUR: u32 = 60 * 60;
pub const HOURS_PER_DAY: usize = 24;
pub const SECONDS_PER_DAY: u32 = SECONDS_PER_HOUR * HOURS_PER_DAY as u32;

/// Zone the HSL service day is anchored to.
pub const SERVICE_TIME_ZONE: Tz = chrono_tz::Europe::Helsinki;

/// Seconds since the start of a service day.
/// Trips running past midnight keep counting, so values above 24h are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(u32);

impl TryFrom<i64> for Time {
    type Error = std::num::TryFromIntError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Ok(Self(u32::try_from(value)?))
    }
}

impl Time {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Hour on the service day clock, 25 for 01:00 the next morning.
    pub const fn service_hour(&self) -> u32 {
        self.0 / SECONDS_PER_HOUR
    }

    /// Display hour in 0..24. Hours past midnight fold back onto the same day,
    /// so 25:00 shares a slot with 01:00.
    pub const fn hour_of_day(&self) -> usize {
        self.service_hour() as usize % HOURS_PER_DAY
    }

    pub const fn is_next_day(&self) -> bool {
        self.0 >= SECONDS_PER_DAY
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(u32);

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * 60)
    }

    pub const fn from_days(days: u32) -> Self {
        Self(days * SECONDS_PER_DAY)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }
}

/// Signed difference between realtime and scheduled arrival, in seconds.
/// Negative values mean the vehicle was early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delay(i32);

impl Display for Delay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl Delay {
    pub const fn from_seconds(secs: i32) -> Self {
        Self(secs)
    }

    pub const fn as_seconds(&self) -> i32 {
        self.0
    }

    /// Within `tolerance` of the schedule in either direction.
    pub const fn is_within(&self, tolerance: Duration) -> bool {
        self.0.unsigned_abs() <= tolerance.as_seconds()
    }

    /// Whole minutes, halves rounded up.
    pub fn as_rounded_minutes(&self) -> i64 {
        round_half_up(self.0 as f64 / 60.0)
    }
}

/// Rounds .5 towards positive infinity, -1.5 becomes -1.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Epoch seconds of local midnight for the day `at` falls on, in the zone of `at`.
/// None if midnight does not exist in that zone on that day.
pub fn service_day_start<Z: TimeZone>(at: &DateTime<Z>) -> Option<i64> {
    let midnight = at.date_naive().and_hms_opt(0, 0, 0)?;
    let start = at.timezone().from_local_datetime(&midnight).earliest()?;
    Some(start.timestamp())
}

#[test]
fn hour_of_day_test() {
    assert_eq!(Time::from_seconds(3690).hour_of_day(), 1);
    assert_eq!(Time::from_seconds(25 * 3600 + 1800).hour_of_day(), 1);
    assert!(Time::from_seconds(25 * 3600).is_next_day());
}

#[test]
fn on_time_tolerance_test() {
    let minute = Duration::from_minutes(1);
    assert!(Delay::from_seconds(-60).is_within(minute));
    assert!(!Delay::from_seconds(61).is_within(minute));
    assert!(!Delay::from_seconds(i32::MIN).is_within(Duration::from_days(1)));
}

#[test]
fn rounded_minutes_test() {
    assert_eq!(Delay::from_seconds(90).as_rounded_minutes(), 2);
    assert_eq!(Delay::from_seconds(-90).as_rounded_minutes(), -1);
    assert_eq!(Delay::from_seconds(29).as_rounded_minutes(), 0);
}
