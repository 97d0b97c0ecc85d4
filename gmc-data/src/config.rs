//! Dashboard configuration.
//!
//! Defaults mirror the dashboard's widgets: a year slider over 2011-2021
//! starting at 2021, a line chart from 1961, and a top-10 bar chart.

use serde::{Deserialize, Serialize};

pub const SLIDER_MIN_YEAR: i32 = 2011;
pub const SLIDER_MAX_YEAR: i32 = 2021;
pub const LINE_START_YEAR: i32 = 1961;
pub const TOP_N: usize = 10;

/// How the donut and summary pick a country before any map click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultCountryRule {
    /// Lexicographically smallest country in the year's records
    #[default]
    Lexicographic,
    /// First country of the year's records in dataset order
    FirstInSlice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub slider_min: i32,
    pub slider_max: i32,
    pub default_year: i32,
    pub line_start_year: i32,
    pub top_n: usize,
    pub default_country: DefaultCountryRule,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            slider_min: SLIDER_MIN_YEAR,
            slider_max: SLIDER_MAX_YEAR,
            default_year: SLIDER_MAX_YEAR,
            line_start_year: LINE_START_YEAR,
            top_n: TOP_N,
            default_country: DefaultCountryRule::default(),
        }
    }
}

impl DashboardConfig {
    /// Clamp a year into the slider range, as the slider widget would.
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.slider_min, self.slider_max.max(self.slider_min))
    }

    /// All years the slider offers, ascending.
    pub fn slider_years(&self) -> Vec<i32> {
        (self.slider_min..=self.slider_max).collect()
    }
}
