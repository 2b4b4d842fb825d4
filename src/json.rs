use crate::error::CensusError;
use crate::record::CensusRecord;

/// Serialize records to a JSON array.
pub fn to_json(records: &[CensusRecord]) -> Result<String, CensusError> {
    Ok(serde_json::to_string(records)?)
}

/// Deserialize records from a JSON array.
pub fn from_json(json: &str) -> Result<Vec<CensusRecord>, CensusError> {
    Ok(serde_json::from_str(json)?)
}
