use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::key::Key;
use crate::order::Order;
use crate::record::CensusRecord;

/// The census field a sort compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    StateName,
    StateCode,
    Population,
    Density,
    Area,
}

impl SortKey {
    /// Names run from A to Z, measures from the largest to the smallest.
    pub fn natural_order(&self) -> Order {
        match self {
            SortKey::StateName | SortKey::StateCode => Order::Asc,
            SortKey::Population | SortKey::Density | SortKey::Area => Order::Desc,
        }
    }

    pub(crate) fn key<'a>(&self, record: &'a CensusRecord) -> Key<'a> {
        match self {
            SortKey::StateName => Key::String { s: &record.state },
            SortKey::StateCode => Key::String { s: &record.state_code },
            SortKey::Population => Key::Integer { i: record.population },
            SortKey::Density => Key::Number { n: record.population_density_per_sq_km },
            SortKey::Area => Key::Number { n: record.area_in_sq_km },
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "state" | "state-name" => Ok(SortKey::StateName),
            "code" | "state-code" => Ok(SortKey::StateCode),
            "population" => Ok(SortKey::Population),
            "density" | "population-density" => Ok(SortKey::Density),
            "area" => Ok(SortKey::Area),
            _ => Err(anyhow::anyhow!("unknown sort key: {s}")),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::StateName => "state-name",
            SortKey::StateCode => "state-code",
            SortKey::Population => "population",
            SortKey::Density => "density",
            SortKey::Area => "area",
        };
        write!(f, "{name}")
    }
}
