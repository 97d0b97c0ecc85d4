//! Read-only commands that print to stdout.

use gmc_core::Dataset;
use gmc_data::{recompute, DashboardConfig, DerivedView, Selection};
use log::info;

/// Build the selection for a one-shot command.
///
/// Unlike the slider, an explicit year is not clamped, so any year in the
/// data can be inspected.
pub fn selection_for(config: &DashboardConfig, year: Option<i32>, country: Option<String>) -> Selection {
    Selection {
        year: year.unwrap_or(config.default_year),
        country,
    }
}

pub fn derive(
    dataset: &Dataset,
    config: &DashboardConfig,
    year: Option<i32>,
    country: Option<String>,
) -> (Selection, DerivedView) {
    let selection = selection_for(config, year, country);
    let view = recompute(dataset, &selection, config);
    (selection, view)
}

pub fn run_view(
    dataset: &Dataset,
    config: &DashboardConfig,
    year: Option<i32>,
    country: Option<String>,
    pretty: bool,
) -> anyhow::Result<()> {
    let (selection, view) = derive(dataset, config, year, country);
    info!("{}: {}", selection.year, view.summary.message());
    let json = if pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    println!("{}", json);
    Ok(())
}

pub fn run_years(dataset: &Dataset) -> anyhow::Result<()> {
    for year in dataset.years() {
        println!("{}", year);
    }
    Ok(())
}

/// Countries for one year (dataset order), or all countries sorted.
pub fn countries(dataset: &Dataset, year: Option<i32>) -> Vec<String> {
    match year {
        Some(year) => dataset
            .year_slice(year)
            .into_iter()
            .map(|r| r.country.clone())
            .collect(),
        None => dataset.countries(),
    }
}

pub fn run_countries(dataset: &Dataset, year: Option<i32>) -> anyhow::Result<()> {
    for country in countries(dataset, year) {
        println!("{}", country);
    }
    Ok(())
}
