use crate::meat_type::MeatValues;
use serde::{Deserialize, Serialize};

/// Meat consumption for one country in one year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    pub country: String,
    pub year: i32,
    /// Per-capita consumption in kg, per meat type
    pub values: MeatValues,
    /// Aggregate per-capita consumption in kg
    pub total_consumption: f64,
}

impl ConsumptionRecord {
    pub fn new(country: &str, year: i32, values: MeatValues, total_consumption: f64) -> Self {
        Self {
            country: country.to_string(),
            year,
            values,
            total_consumption,
        }
    }

    /// Build a record whose total is the sum of its meat values.
    pub fn with_summed_total(country: &str, year: i32, values: MeatValues) -> Self {
        Self::new(country, year, values, values.sum())
    }
}
