use tracing::warn;

use crate::{
    hsl::models::HslStopTime,
    model::{Error, RouteKey},
    shared::{Delay, Time},
};

/// One arrival at a stop on a service day.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub scheduled_arrival: Time,
    pub realtime_arrival: Time,
    pub delay: Delay,
    /// Whether live data backs `realtime_arrival` and `delay`.
    pub realtime: bool,
    /// Epoch seconds of the service day start the times are relative to.
    pub service_day: i64,
    /// None when the trip or pattern data was missing.
    pub route: Option<RouteKey>,
}

impl TryFrom<HslStopTime> for Departure {
    type Error = Error;

    fn try_from(value: HslStopTime) -> Result<Self, Self::Error> {
        let scheduled_arrival = Time::try_from(value.scheduled_arrival)
            .map_err(|_| Error::InvalidTime(value.scheduled_arrival))?;
        let realtime_arrival = Time::try_from(value.realtime_arrival)
            .map_err(|_| Error::InvalidTime(value.realtime_arrival))?;

        // A route we cannot classify is treated like a missing one.
        let route = value
            .route()
            .and_then(|route| match RouteKey::try_from(route) {
                Ok(key) => Some(key),
                Err(err) => {
                    warn!("Ignoring departure route: {err}");
                    None
                }
            });

        Ok(Self {
            scheduled_arrival,
            realtime_arrival,
            delay: Delay::from_seconds(value.arrival_delay),
            realtime: value.realtime,
            service_day: value.service_day,
            route,
        })
    }
}
