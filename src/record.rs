use serde::{Deserialize, Serialize};

use crate::error::CensusError;
use crate::row_shape::{AREA, DENSITY, POPULATION, STATE, STATE_CODE};
use crate::value::Row;

/// A census record of one state.
///
/// India records get their `state_code` from the state code file, it stays empty until the
/// join runs. US records carry it in their own row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CensusRecord {
    pub state: String,
    #[serde(default)]
    pub state_code: String,
    pub population: u64,
    pub population_density_per_sq_km: f64,
    pub area_in_sq_km: f64,
}

impl CensusRecord {
    /// Build a record from a row read with [crate::row_shape::RowShape::india_census].
    pub fn from_india_row(row: &Row) -> Result<CensusRecord, CensusError> {
        Ok(
            CensusRecord {
                state: row.string(STATE)?,
                state_code: String::new(),
                population: row.integer(POPULATION)?,
                population_density_per_sq_km: row.number(DENSITY)?,
                area_in_sq_km: row.number(AREA)?,
            }
        )
    }

    /// Build a record from a row read with [crate::row_shape::RowShape::us_census].
    pub fn from_us_row(row: &Row) -> Result<CensusRecord, CensusError> {
        Ok(
            CensusRecord {
                state: row.string(STATE)?,
                state_code: row.string(STATE_CODE)?,
                population: row.integer(POPULATION)?,
                population_density_per_sq_km: row.number(DENSITY)?,
                area_in_sq_km: row.number(AREA)?,
            }
        )
    }
}

/// A row of the India state code file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateCodeEntry {
    pub state: String,
    pub state_code: String,
}

impl StateCodeEntry {
    /// Build an entry from a row read with [crate::row_shape::RowShape::india_state_code].
    pub fn from_row(row: &Row) -> Result<StateCodeEntry, CensusError> {
        Ok(
            StateCodeEntry {
                state: row.string(STATE)?,
                state_code: row.string(STATE_CODE)?,
            }
        )
    }
}
