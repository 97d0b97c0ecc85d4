//! The immutable, in-memory consumption dataset.
//!
//! A `Dataset` keeps records in insertion order and indexes them by year and
//! by `(country, year)`. It is never mutated after construction; share it
//! with `Arc<Dataset>` and pass `&Dataset` into recomputes.

use crate::error::{DatasetError, Result};
use crate::record::ConsumptionRecord;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Row positions for one year, in insertion order, plus a country lookup.
#[derive(Debug, Default)]
struct YearIndex {
    rows: Vec<usize>,
    by_country: HashMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<ConsumptionRecord>,
    years: BTreeMap<i32, YearIndex>,
}

impl Dataset {
    /// Build a dataset, enforcing at most one record per (country, year).
    pub fn from_records(records: Vec<ConsumptionRecord>) -> Result<Self> {
        let mut years: BTreeMap<i32, YearIndex> = BTreeMap::new();
        for (row, record) in records.iter().enumerate() {
            let index = years.entry(record.year).or_default();
            if index.by_country.contains_key(&record.country) {
                return Err(DatasetError::DuplicateRecord {
                    country: record.country.clone(),
                    year: record.year,
                });
            }
            index.by_country.insert(record.country.clone(), row);
            index.rows.push(row);
        }
        Ok(Self { records, years })
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ConsumptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    /// First and last year present, if any.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = *self.years.keys().next()?;
        let last = *self.years.keys().next_back()?;
        Some((first, last))
    }

    /// Distinct countries across all years, sorted.
    pub fn countries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Records for one year, in insertion order. Empty for unknown years.
    pub fn year_slice(&self, year: i32) -> Vec<&ConsumptionRecord> {
        self.years
            .get(&year)
            .map(|index| index.rows.iter().map(|&row| &self.records[row]).collect())
            .unwrap_or_default()
    }

    /// Records for every year in `start..=end`, grouped by year ascending.
    pub fn years_between(&self, start: i32, end: i32) -> Vec<(i32, Vec<&ConsumptionRecord>)> {
        if start > end {
            return Vec::new();
        }
        self.years
            .range(start..=end)
            .map(|(&year, index)| {
                let rows = index.rows.iter().map(|&row| &self.records[row]).collect();
                (year, rows)
            })
            .collect()
    }

    /// The record for a country in a year.
    pub fn get(&self, country: &str, year: i32) -> Option<&ConsumptionRecord> {
        self.years
            .get(&year)
            .and_then(|index| index.by_country.get(country))
            .map(|&row| &self.records[row])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meat_type::MeatValues;

    fn record(country: &str, year: i32, poultry: f64) -> ConsumptionRecord {
        ConsumptionRecord::with_summed_total(
            country,
            year,
            MeatValues::from_array([poultry, 1.0, 1.0, 1.0, 1.0, 1.0]),
        )
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("Germany", 2020, 16.0),
            record("France", 2020, 18.3),
            record("France", 2019, 18.0),
            record("Brazil", 2021, 40.0),
        ])
        .unwrap()
    }

    #[test]
    fn years_are_sorted_and_distinct() {
        let ds = sample();
        assert_eq!(ds.years(), vec![2019, 2020, 2021]);
        assert_eq!(ds.year_range(), Some((2019, 2021)));
    }

    #[test]
    fn countries_are_sorted_and_distinct() {
        assert_eq!(sample().countries(), vec!["Brazil", "France", "Germany"]);
    }

    #[test]
    fn year_slice_keeps_insertion_order() {
        let ds = sample();
        let slice = ds.year_slice(2020);
        let names: Vec<&str> = slice.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["Germany", "France"]);
        assert!(ds.year_slice(1999).is_empty());
    }

    #[test]
    fn years_between_is_inclusive() {
        let ds = sample();
        let grouped = ds.years_between(2019, 2020);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, 2019);
        assert_eq!(grouped[1].1.len(), 2);
        assert!(ds.years_between(2021, 2019).is_empty());
    }

    #[test]
    fn get_finds_country_year() {
        let ds = sample();
        assert_eq!(ds.get("France", 2019).unwrap().values.poultry, 18.0);
        assert!(ds.get("France", 2021).is_none());
        assert!(ds.get("Spain", 2020).is_none());
    }

    #[test]
    fn duplicate_country_year_is_rejected() {
        let result = Dataset::from_records(vec![record("France", 2020, 1.0), record("France", 2020, 2.0)]);
        match result {
            Err(DatasetError::DuplicateRecord { country, year }) => {
                assert_eq!(country, "France");
                assert_eq!(year, 2020);
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn empty_dataset_is_allowed() {
        let ds = Dataset::from_records(Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.year_range(), None);
    }
}
