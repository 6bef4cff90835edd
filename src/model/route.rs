use std::{cmp::Ordering, sync::Arc};

use crate::{
    hsl::models::HslRoute,
    model::{Error, Mode},
    shared::locale_cmp,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: Arc<str>,
    pub short_name: Arc<str>,
    pub long_name: Option<Arc<str>>,
    pub mode: Mode,
}

impl TryFrom<HslRoute> for Route {
    type Error = Error;

    fn try_from(value: HslRoute) -> Result<Self, Self::Error> {
        let mode: Mode = value.mode.as_deref().ok_or(Error::MissingMode)?.parse()?;
        let id = value.gtfs_id.ok_or(Error::MissingId)?;
        Ok(Self {
            id: id.into(),
            short_name: value.short_name.unwrap_or_default().into(),
            long_name: value.long_name.map(Into::into),
            mode,
        })
    }
}

/// Rider facing identity of a route.
///
/// Many trips and patterns share one label, so departures are grouped by
/// mode and short name rather than by gtfs id. Ordered by mode, then by a
/// case insensitive comparison of the short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub mode: Mode,
    pub short_name: Arc<str>,
}

impl RouteKey {
    pub fn new(mode: Mode, short_name: impl Into<Arc<str>>) -> Self {
        Self {
            mode,
            short_name: short_name.into(),
        }
    }
}

impl Ord for RouteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.mode
            .cmp(&other.mode)
            .then_with(|| locale_cmp(&self.short_name, &other.short_name))
    }
}

impl PartialOrd for RouteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<&HslRoute> for RouteKey {
    type Error = Error;

    fn try_from(value: &HslRoute) -> Result<Self, Self::Error> {
        let mode: Mode = value.mode.as_deref().ok_or(Error::MissingMode)?.parse()?;
        Ok(Self::new(mode, value.short_name.as_deref().unwrap_or_default()))
    }
}
