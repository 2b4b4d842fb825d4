use census_analyser::census_sort::CensusSort;
use census_analyser::country::Country;
use census_analyser::loader::CensusLoader;
use census_analyser::sort_key::SortKey;

use common::{INDIA_CENSUS_CSV_FILE_PATH, INDIA_CENSUS_DUPLICATE_CSV_FILE_PATH, INDIA_STATE_CODE_CSV_FILE_PATH, path};

mod common;

#[test]
fn test_load_returns_all_records() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    assert_eq!(dataset.len(), 29);
    for key in [SortKey::StateName, SortKey::StateCode, SortKey::Population, SortKey::Density, SortKey::Area] {
        assert_eq!(CensusSort::new(key).sort(&dataset).len(), 29);
    }
    Ok(())
}

#[test]
fn test_join_sets_state_codes() -> Result<(), anyhow::Error> {
    let loader = CensusLoader::new(Country::India);
    let without_codes = loader.load(&path(INDIA_CENSUS_CSV_FILE_PATH), None)?;
    assert!(without_codes.iter().all(|r| r.state_code.is_empty()));

    let dataset = loader.load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    assert!(dataset.iter().all(|r| !r.state_code.is_empty()));
    assert_eq!(dataset.get("Goa").unwrap().state_code, "GA");
    assert_eq!(dataset.get("Telangana").unwrap().state_code, "TS");
    Ok(())
}

#[test]
fn test_unmatched_state_codes_are_dropped() -> Result<(), anyhow::Error> {
    let loader = CensusLoader::new(Country::India);
    let mut dataset = loader.load(&path(INDIA_CENSUS_CSV_FILE_PATH), None)?;
    let matched = loader.load_state_codes(&mut dataset, &path(INDIA_STATE_CODE_CSV_FILE_PATH))?;
    assert_eq!(matched, 29);
    assert_eq!(dataset.len(), 29);
    assert!(dataset.get("Delhi").is_none());
    assert!(dataset.get("Andaman and Nicobar Islands").is_none());
    Ok(())
}

#[test]
fn test_duplicate_state_last_row_wins() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_DUPLICATE_CSV_FILE_PATH), None)?;
    assert_eq!(dataset.len(), 5);
    let bihar = dataset.get("Bihar").unwrap();
    assert_eq!(bihar.population, 104099452);
    assert_eq!(bihar.population_density_per_sq_km, 1106.0);
    Ok(())
}

#[test]
fn test_sorted_by_state_name() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sorted = CensusSort::new(SortKey::StateName).sort(&dataset);
    assert_eq!(sorted[0].state, "Andhra Pradesh");
    assert_eq!(sorted[28].state, "West Bengal");
    Ok(())
}

#[test]
fn test_sort_by_state_name_is_idempotent() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sort = CensusSort::new(SortKey::StateName);
    let sorted = sort.sort(&dataset);
    assert!(sort.check(&sorted));
    let mut again = sorted.clone();
    sort.sort_records(&mut again);
    assert_eq!(again, sorted);
    Ok(())
}

#[test]
fn test_sorted_by_state_code() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sorted = CensusSort::new(SortKey::StateCode).sort(&dataset);
    assert_eq!(sorted[0].state_code, "AP");
    assert_eq!(sorted[28].state_code, "WB");
    Ok(())
}

#[test]
fn test_sorted_by_population() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sorted = CensusSort::new(SortKey::Population).sort(&dataset);
    assert_eq!(sorted[0].state, "Uttar Pradesh");
    assert_eq!(sorted[28].state, "Sikkim");
    Ok(())
}

#[test]
fn test_sorted_by_density() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sorted = CensusSort::new(SortKey::Density).sort(&dataset);
    assert_eq!(sorted[0].state, "Bihar");
    assert_eq!(sorted[28].state, "Arunachal Pradesh");

    // equal densities keep file order
    let chhattisgarh = sorted.iter().position(|r| r.state == "Chhattisgarh").unwrap();
    let uttarakhand = sorted.iter().position(|r| r.state == "Uttarakhand").unwrap();
    assert_eq!(chhattisgarh + 1, uttarakhand);
    Ok(())
}

#[test]
fn test_sorted_by_area() -> Result<(), anyhow::Error> {
    let dataset = CensusLoader::new(Country::India)
        .load(&path(INDIA_CENSUS_CSV_FILE_PATH), Some(path(INDIA_STATE_CODE_CSV_FILE_PATH).as_path()))?;
    let sorted = CensusSort::new(SortKey::Area).sort(&dataset);
    assert_eq!(sorted[0].state, "Rajasthan");
    assert_eq!(sorted[28].state, "Goa");
    Ok(())
}
