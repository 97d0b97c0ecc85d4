//! The recompute pipeline: one selection in, one [`DerivedView`] out.
//!
//! Steps, in order:
//! 1. filter the dataset to the selected year;
//! 2. resolve the country (map click, else the configured default rule);
//! 3. map series: every country's total for the year;
//! 4. bar series: top N countries by poultry;
//! 5. line series: per-year cross-country means from the line start year;
//! 6. pie series and summary for the resolved country, or the no-data card.

use crate::config::{DashboardConfig, DefaultCountryRule};
use crate::models::{BarEntry, DerivedView, LinePoint, MapPoint, PieSlice, Summary};
use crate::selection::Selection;
use gmc_core::{ConsumptionRecord, Dataset, MeatType, MeatValues};
use gmc_utils::numbers::{mean, thousands_label};
use std::collections::BTreeMap;

/// Compute every chart series and the summary for a selection.
///
/// Pure: the dataset is only borrowed and identical inputs give identical
/// output. A country with no record for the year is not an error; it yields
/// an empty pie and [`Summary::NoData`].
pub fn recompute(dataset: &Dataset, selection: &Selection, config: &DashboardConfig) -> DerivedView {
    let year_slice = dataset.year_slice(selection.year);
    let resolved = resolve_country(&year_slice, selection.country.as_deref(), config.default_country);

    let view = DerivedView {
        map_series: map_series(&year_slice),
        bar_series: bar_series(&year_slice, config.top_n),
        line_series: line_series(dataset, config.line_start_year, selection.year),
        pie_series: pie_series(dataset, resolved, selection.year),
        summary: summary(dataset, resolved, selection.year),
    };
    log::debug!(
        "[GMC] recompute: year {} country {:?} -> {} map, {} bar, {} line, {} pie",
        selection.year,
        resolved,
        view.map_series.len(),
        view.bar_series.len(),
        view.line_series.len(),
        view.pie_series.len()
    );
    view
}

/// [`recompute`] with the default configuration.
pub fn recompute_default(dataset: &Dataset, year: i32, clicked: Option<&str>) -> DerivedView {
    recompute(dataset, &Selection::new(year, clicked), &DashboardConfig::default())
}

fn resolve_country<'a>(
    year_slice: &[&'a ConsumptionRecord],
    clicked: Option<&'a str>,
    rule: DefaultCountryRule,
) -> Option<&'a str> {
    if clicked.is_some() {
        return clicked;
    }
    match rule {
        DefaultCountryRule::Lexicographic => year_slice.iter().map(|&r| r.country.as_str()).min(),
        DefaultCountryRule::FirstInSlice => year_slice.first().map(|&r| r.country.as_str()),
    }
}

fn map_series(year_slice: &[&ConsumptionRecord]) -> Vec<MapPoint> {
    year_slice
        .iter()
        .map(|r| MapPoint {
            country: r.country.clone(),
            total_consumption: r.total_consumption,
        })
        .collect()
}

fn bar_series(year_slice: &[&ConsumptionRecord], top_n: usize) -> Vec<BarEntry> {
    // Group by country, summing, so repeated rows would still stack correctly
    let mut grouped: BTreeMap<&str, MeatValues> = BTreeMap::new();
    for r in year_slice {
        let entry = grouped.entry(r.country.as_str()).or_default();
        *entry = entry.add(&r.values);
    }

    // Stable sort over country-ordered groups: ties stay alphabetical
    let mut ranked: Vec<(&str, MeatValues)> = grouped.into_iter().collect();
    ranked.sort_by(|a, b| b.1.poultry.total_cmp(&a.1.poultry));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(country, values)| BarEntry {
            country: country.to_string(),
            values,
        })
        .collect()
}

fn line_series(dataset: &Dataset, start_year: i32, end_year: i32) -> Vec<LinePoint> {
    dataset
        .years_between(start_year, end_year)
        .into_iter()
        .filter_map(|(year, rows)| {
            let mut means = MeatValues::default();
            for meat in MeatType::ALL {
                let values: Vec<f64> = rows.iter().map(|r| r.values.get(meat)).collect();
                means.set(meat, mean(&values)?);
            }
            Some(LinePoint { year, means })
        })
        .collect()
}

fn pie_series(dataset: &Dataset, country: Option<&str>, year: i32) -> Vec<PieSlice> {
    let Some(record) = country.and_then(|c| dataset.get(c, year)) else {
        return Vec::new();
    };
    record
        .values
        .iter()
        .map(|(meat_type, value)| PieSlice {
            meat_type,
            label: meat_type.label(),
            value,
        })
        .collect()
}

fn summary(dataset: &Dataset, country: Option<&str>, year: i32) -> Summary {
    match country.and_then(|c| dataset.get(c, year)) {
        Some(record) => Summary::Resolved {
            country: record.country.clone(),
            year,
            total_consumption_k: thousands_label(record.total_consumption),
        },
        None => Summary::NoData,
    }
}
