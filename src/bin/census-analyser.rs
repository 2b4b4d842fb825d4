use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use simple_logger::SimpleLogger;

use census_analyser::census_sort::CensusSort;
use census_analyser::country::Country;
use census_analyser::json::to_json;
use census_analyser::loader::CensusLoader;
use census_analyser::order::Order;
use census_analyser::sort_key::SortKey;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

/// Print census records sorted by one field as JSON
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Census country: india or us
    #[arg(long)]
    country: String,

    /// Census CSV file
    #[arg(long)]
    census: PathBuf,

    /// India state code CSV file
    #[arg(long)]
    state_codes: Option<PathBuf>,

    /// state-name, state-code, population, density or area
    #[arg(long, default_value = "state-name")]
    sort_by: SortKey,

    /// Override the natural order of the sort field
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Log progress to stderr
    #[arg(long)]
    verbose: bool,
}

// cargo run -- --country india --census ./tests/fixtures/IndiaStateCensusData.csv --state-codes ./tests/fixtures/IndiaStateCode.csv --sort-by state-code
pub fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .with_context(|| "init logger")?;

    let country: Country = args.country.parse()?;
    let dataset = CensusLoader::new(country)
        .load(&args.census, args.state_codes.as_deref())
        .with_context(|| format!("load {} census", country))?;

    let mut sort = CensusSort::new(args.sort_by);
    match args.order {
        Some(OrderArg::Asc) => sort.with_order(Order::Asc),
        Some(OrderArg::Desc) => sort.with_order(Order::Desc),
        None => {}
    }

    println!("{}", to_json(&sort.sort(&dataset))?);
    Ok(())
}
