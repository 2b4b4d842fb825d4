//! This crate loads India and US census data from CSV files and sorts it by state name, state
//! code, population, population density or area.
//!
//! Each census file is read against a [row_shape::RowShape], a declared list of the columns
//! the file must carry and the types their cells convert to. The header must match the shape
//! and every cell must convert, otherwise the whole load fails with
//! [error::ErrorKind::FileProblem]. Loaded records are kept in a [dataset::Dataset] keyed by
//! state name. India records receive their state codes from a second file joined by state
//! name.
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use census_analyser::census_sort::CensusSort;
//! use census_analyser::country::Country;
//! use census_analyser::json::to_json;
//! use census_analyser::loader::CensusLoader;
//! use census_analyser::sort_key::SortKey;
//!
//! fn india_by_state_code(census: PathBuf, codes: PathBuf) -> Result<String, anyhow::Error> {
//!     let dataset = CensusLoader::new(Country::India).load(&census, Some(codes.as_path()))?;
//!
//!     // state names and codes sort from A to Z, population, density and area from the
//!     // largest to the smallest
//!     let sorted = CensusSort::new(SortKey::StateCode).sort(&dataset);
//!     Ok(to_json(&sorted)?)
//! }
//! ```
//!

pub(crate) mod key;

pub mod census_analyser;
pub mod census_sort;
pub mod column;
pub mod config;
pub mod country;
pub mod dataset;
pub mod error;
pub mod field_type;
pub mod json;
pub mod loader;
pub mod order;
pub mod record;
pub mod row_iterator;
pub mod row_shape;
pub mod sort_key;
pub mod value;
