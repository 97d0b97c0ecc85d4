//! Derived view structs handed to the chart renderer.
//!
//! All structs derive `Serialize` so each series can be passed to the
//! renderer as JSON.

use gmc_core::{MeatType, MeatValues};
use serde::Serialize;

/// One country's total consumption for the choropleth map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapPoint {
    pub country: String,
    /// Total consumption in kg per capita.
    pub total_consumption: f64,
}

/// One stacked bar: a country with all six meat values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarEntry {
    pub country: String,
    pub values: MeatValues,
}

/// Cross-country mean of each meat type for one year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    pub means: MeatValues,
}

/// One donut slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub meat_type: MeatType,
    pub label: &'static str,
    pub value: f64,
}

/// Text card contents.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Summary {
    Resolved {
        country: String,
        year: i32,
        /// Total consumption in thousands, e.g. `"0.08K"`.
        total_consumption_k: String,
    },
    NoData,
}

impl Summary {
    /// Display text for the summary panel.
    pub fn message(&self) -> String {
        match self {
            Summary::Resolved {
                country,
                year,
                total_consumption_k,
            } => format!("{} ({}): total consumption {}", country, year, total_consumption_k),
            Summary::NoData => "No data available for the selected country".to_string(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Summary::Resolved { .. })
    }
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedView {
    pub map_series: Vec<MapPoint>,
    pub bar_series: Vec<BarEntry>,
    pub line_series: Vec<LinePoint>,
    pub pie_series: Vec<PieSlice>,
    pub summary: Summary,
}

impl DerivedView {
    /// Pie values in canonical meat type order.
    pub fn pie_values(&self) -> Vec<f64> {
        self.pie_series.iter().map(|s| s.value).collect()
    }
}
