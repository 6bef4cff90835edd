use chrono_tz::Tz;

use crate::shared::{DETAIL_RADIUS, DISPLAY_RADIUS, Distance, Duration, SERVICE_TIME_ZONE};

pub struct Config {
    pub endpoint: String,
    pub api_key_header: String,
    pub display_radius: Distance,
    pub detail_radius: Distance,
    pub time_range: Duration,
    /// Service days start at midnight in this zone, whatever the host's zone is.
    pub time_zone: Tz,
    pub number_of_departures: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://api.digitransit.fi/routing/v1/routers/hsl/index/graphql".into(),
            api_key_header: "digitransit-subscription-key".into(),
            display_radius: DISPLAY_RADIUS,
            detail_radius: DETAIL_RADIUS,
            time_range: Duration::from_days(1),
            time_zone: SERVICE_TIME_ZONE,
            number_of_departures: 1000,
        }
    }
}
