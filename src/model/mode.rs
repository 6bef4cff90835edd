use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown transport mode: {0}")]
pub struct UnknownMode(pub String);

/// Transport category of a route.
///
/// Variants are declared in name order, so the derived `Ord` sorts modes the
/// same way their names sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Bus,
    Ferry,
    Rail,
    Subway,
    Tram,
}

impl Mode {
    /// Every mode, in the order the mode filter lists them.
    pub const ALL: [Mode; 5] = [Mode::Bus, Mode::Tram, Mode::Rail, Mode::Subway, Mode::Ferry];

    /// Used when a stop has no routes to classify.
    pub const FALLBACK: Mode = Mode::Bus;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Bus => "BUS",
            Mode::Ferry => "FERRY",
            Mode::Rail => "RAIL",
            Mode::Subway => "SUBWAY",
            Mode::Tram => "TRAM",
        }
    }

    /// HSL brand colour for map markers and route tags.
    pub const fn color(&self) -> &'static str {
        match self {
            Mode::Bus => "#0066cc",
            Mode::Ferry => "#00b9e4",
            Mode::Rail => "#8c4799",
            Mode::Subway => "#ff6319",
            Mode::Tram => "#00985f",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUS" => Ok(Mode::Bus),
            "FERRY" => Ok(Mode::Ferry),
            "RAIL" => Ok(Mode::Rail),
            "SUBWAY" => Ok(Mode::Subway),
            "TRAM" => Ok(Mode::Tram),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[test]
fn mode_parse_test() {
    for mode in Mode::ALL {
        assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
    }
    assert_eq!("AIRPLANE".parse::<Mode>(), Err(UnknownMode("AIRPLANE".into())));
    assert!("bus".parse::<Mode>().is_err());
}

#[test]
fn mode_order_test() {
    let mut modes = Mode::ALL.to_vec();
    modes.sort();
    let names: Vec<_> = modes.iter().map(Mode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
