use std::fmt;
use std::str::FromStr;

use crate::InputError;

/// Swedish electricity price area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceZone {
    /// Luleå
    Se1,
    /// Sundsvall
    Se2,
    /// Stockholm
    #[default]
    Se3,
    /// Malmö
    Se4,
}

impl PriceZone {
    pub const ALL: [PriceZone; 4] = [PriceZone::Se1, PriceZone::Se2, PriceZone::Se3, PriceZone::Se4];

    /// Returns the area code used by the price API.
    pub const fn code(&self) -> &'static str {
        match self {
            PriceZone::Se1 => "SE1",
            PriceZone::Se2 => "SE2",
            PriceZone::Se3 => "SE3",
            PriceZone::Se4 => "SE4",
        }
    }
}

impl fmt::Display for PriceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PriceZone {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        PriceZone::ALL
            .into_iter()
            .find(|zone| zone.code() == code)
            .ok_or_else(|| InputError::UnknownZone(s.trim().to_owned()))
    }
}
