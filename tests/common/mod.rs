#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use tempfile::{Builder, NamedTempFile};

pub const INDIA_CENSUS_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusData.csv";
pub const INDIA_CENSUS_TEXT_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusData.txt";
pub const INDIA_CENSUS_WRONG_DELIMITER_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusDataWrongDelimiter.csv";
pub const INDIA_CENSUS_WRONG_HEADER_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusDataWrongHeader.csv";
pub const INDIA_CENSUS_WRONG_TYPE_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusDataWrongType.csv";
pub const INDIA_CENSUS_MISSING_FIELD_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusDataMissingField.csv";
pub const INDIA_CENSUS_DUPLICATE_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCensusDataDuplicate.csv";
pub const INDIA_STATE_CODE_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCode.csv";
pub const STATE_CODE_TEXT_FILE_PATH: &str = "./tests/fixtures/IndiaStateCode.txt";
pub const STATE_CODE_WRONG_DELIMITER_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCodeWrongDelimiter.csv";
pub const STATE_CODE_WRONG_HEADER_CSV_FILE_PATH: &str = "./tests/fixtures/IndiaStateCodeWrongHeader.csv";
pub const US_CENSUS_CSV_FILE_PATH: &str = "./tests/fixtures/USCensusData.csv";

pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

pub fn path(path: &str) -> PathBuf {
    PathBuf::from(path)
}

/// Write `content` to a new file under ./target/results/ with the given suffix. The file is
/// removed when the returned handle is dropped.
pub fn write_temp_file(content: &str, suffix: &str) -> Result<NamedTempFile, anyhow::Error> {
    setup();
    let mut file = Builder::new()
        .prefix("census-")
        .suffix(suffix)
        .tempfile_in("./target/results/")?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
