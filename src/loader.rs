use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Config;
use crate::country::Country;
use crate::dataset::Dataset;
use crate::error::{CensusError, FileProblem};
use crate::record::StateCodeEntry;
use crate::row_iterator::RowIterator;
use crate::row_shape::RowShape;

/// Load census files of a country into a [Dataset]
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use census_analyser::country::Country;
/// use census_analyser::loader::CensusLoader;
///
/// fn load_india(census: PathBuf, codes: PathBuf) -> Result<usize, anyhow::Error> {
///     let loader = CensusLoader::new(Country::India);
///     let dataset = loader.load(&census, Some(codes.as_path()))?;
///     Ok(dataset.len())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CensusLoader {
    country: Country,
    config: Config,
}

impl CensusLoader {
    /// Create a loader for `country` with the default [Config].
    pub fn new(country: Country) -> CensusLoader {
        CensusLoader {
            country,
            config: Config::default(),
        }
    }

    /// Create a loader from a country name. An unknown country fails with
    /// [crate::error::ErrorKind::InvalidCountry] before any file is touched.
    pub fn for_country(country: &str) -> Result<CensusLoader, CensusError> {
        Ok(CensusLoader::new(Country::from_str(country)?))
    }

    /// Set the reader [Config]
    pub fn with_config(mut self, config: Config) -> CensusLoader {
        self.config = config;
        self
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// Load the census file at `primary` and, for India, join state codes from `join`.
    ///
    /// Rows with a state already loaded replace the earlier record. State codes for states
    /// absent from the census are dropped. Any malformed input aborts the load.
    pub fn load(&self, primary: &Path, join: Option<&Path>) -> Result<Dataset, CensusError> {
        log::info!("Load {} census from {}", self.country, primary.display());
        let mut dataset = Dataset::new();
        for row in RowIterator::new(primary, self.country.row_shape(), &self.config)? {
            let record = self.country.to_record(&row?)?;
            let state = record.state.clone();
            if dataset.insert(record) {
                log::debug!("Duplicate state {state} in {}, keeping the last row", primary.display());
            }
        }

        match join {
            Some(join) if self.country.supports_state_codes() => {
                self.load_state_codes(&mut dataset, join)?;
            }
            Some(join) => {
                log::warn!("{} census carries its own state codes, ignoring {}", self.country, join.display());
            }
            None => {}
        }

        log::info!("Loaded {} {} census records", dataset.len(), self.country);
        Ok(dataset)
    }

    /// Load from a list of paths: the census file first, then the optional state code file.
    pub fn load_paths(&self, paths: &[PathBuf]) -> Result<Dataset, CensusError> {
        let primary = paths.first()
            .ok_or_else(|| CensusError::file_problem(FileProblem::MissingPath, "no census file given"))?;
        self.load(primary, paths.get(1).map(|p| p.as_path()))
    }

    /// Join state codes from the file at `path` into `dataset`. Returns the number of
    /// records that received a code.
    pub fn load_state_codes(&self, dataset: &mut Dataset, path: &Path) -> Result<usize, CensusError> {
        log::info!("Join state codes from {}", path.display());
        let mut matched = 0;
        for row in RowIterator::new(path, RowShape::india_state_code(), &self.config)? {
            let entry = StateCodeEntry::from_row(&row?)?;
            let state = entry.state.clone();
            if dataset.apply_state_code(entry) {
                matched += 1;
            } else {
                log::debug!("No census record for state {state}, dropping its code");
            }
        }
        Ok(matched)
    }
}
