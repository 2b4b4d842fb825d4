use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CensusError;
use crate::record::CensusRecord;
use crate::row_shape::RowShape;
use crate::value::Row;

/// Census country
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Country {
    /// India census, state codes joined from a separate file
    India,
    /// US census, state codes in the census file itself
    Us,
}

impl Country {
    /// The shape of this country's census file.
    pub fn row_shape(&self) -> RowShape {
        match self {
            Country::India => RowShape::india_census(),
            Country::Us => RowShape::us_census(),
        }
    }

    /// Whether a state code file can be joined to this country's census.
    pub fn supports_state_codes(&self) -> bool {
        match self {
            Country::India => true,
            Country::Us => false,
        }
    }

    pub(crate) fn to_record(&self, row: &Row) -> Result<CensusRecord, CensusError> {
        match self {
            Country::India => CensusRecord::from_india_row(row),
            Country::Us => CensusRecord::from_us_row(row),
        }
    }
}

impl FromStr for Country {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "india" => Ok(Country::India),
            "us" | "usa" => Ok(Country::Us),
            _ => Err(CensusError::InvalidCountry { country: s.to_string() }),
        }
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Country::India => write!(f, "INDIA"),
            Country::Us => write!(f, "US"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::country::Country;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_str() {
        assert_eq!(Country::from_str("India").unwrap(), Country::India);
        assert_eq!(Country::from_str("US").unwrap(), Country::Us);
        assert_eq!(Country::from_str("usa").unwrap(), Country::Us);
        let error = Country::from_str("Atlantis").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidCountry);
    }
}
