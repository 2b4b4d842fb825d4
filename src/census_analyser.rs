use std::path::PathBuf;

use crate::census_sort::CensusSort;
use crate::config::Config;
use crate::country::Country;
use crate::dataset::Dataset;
use crate::error::CensusError;
use crate::json::to_json;
use crate::loader::CensusLoader;
use crate::sort_key::SortKey;

/// Load a country's census once and serve sorted JSON views of it.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use census_analyser::census_analyser::CensusAnalyser;
/// use census_analyser::country::Country;
///
/// fn most_populous_first(census: PathBuf) -> Result<String, anyhow::Error> {
///     let mut analyser = CensusAnalyser::new(Country::Us);
///     analyser.load_census_data(&[census])?;
///     Ok(analyser.sorted_by_population()?)
/// }
/// ```
pub struct CensusAnalyser {
    country: Country,
    config: Config,
    dataset: Dataset,
}

impl CensusAnalyser {
    /// Create an analyser for `country` with an empty dataset.
    pub fn new(country: Country) -> CensusAnalyser {
        CensusAnalyser {
            country,
            config: Config::default(),
            dataset: Dataset::new(),
        }
    }

    /// Set the reader [Config] used by later loads
    pub fn with_config(mut self, config: Config) -> CensusAnalyser {
        self.config = config;
        self
    }

    /// Get the [Country] this analyser loads.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Get the records of the last successful load.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Load the census file `paths[0]` and the optional state code file `paths[1]`,
    /// replacing previously loaded data. Returns the number of records loaded. On failure
    /// the previously loaded data is kept.
    pub fn load_census_data(&mut self, paths: &[PathBuf]) -> Result<usize, CensusError> {
        let loader = CensusLoader::new(self.country).with_config(self.config.clone());
        self.dataset = loader.load_paths(paths)?;
        Ok(self.dataset.len())
    }

    /// JSON array of the loaded records sorted by `key` in its natural order.
    pub fn sorted_census_data(&self, key: SortKey) -> Result<String, CensusError> {
        let sorted = CensusSort::new(key).sort(&self.dataset);
        to_json(&sorted)
    }

    /// JSON sorted by state name, A to Z.
    pub fn sorted_by_state_name(&self) -> Result<String, CensusError> {
        self.sorted_census_data(SortKey::StateName)
    }

    /// JSON sorted by state code, A to Z.
    pub fn sorted_by_state_code(&self) -> Result<String, CensusError> {
        self.sorted_census_data(SortKey::StateCode)
    }

    /// JSON sorted by population, largest first.
    pub fn sorted_by_population(&self) -> Result<String, CensusError> {
        self.sorted_census_data(SortKey::Population)
    }

    /// JSON sorted by population density, densest first.
    pub fn sorted_by_density(&self) -> Result<String, CensusError> {
        self.sorted_census_data(SortKey::Density)
    }

    /// JSON sorted by area, largest first.
    pub fn sorted_by_area(&self) -> Result<String, CensusError> {
        self.sorted_census_data(SortKey::Area)
    }
}
