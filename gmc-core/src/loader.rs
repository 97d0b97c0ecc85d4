//! CSV loading functions for building a [`Dataset`].
//!
//! # CSV Format
//!
//! Headers are required and matched after normalization (lowercase,
//! alphanumerics only), so `SheepAndGoat` and `Sheep and goat` name the
//! same column:
//!
//! ```text
//! Country,Year,Poultry,Beef,Pork,SheepAndGoat,FishAndSeafood,OtherMeats,TotalConsumption
//! France,2020,18.3,14.2,30.1,2.5,9.0,1.0,75.1
//! ```
//!
//! Rows with an empty country, a non-integer year, or a missing, negative or
//! non-numeric meat value are skipped. An empty total is filled with the sum
//! of the meat values.

use crate::error::{DatasetError, Result};
use crate::meat_type::{MeatType, MeatValues};
use crate::record::ConsumptionRecord;
use crate::Dataset;
use flate2::read::GzDecoder;
use gmc_utils::headers::normalize_header;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COUNTRY_ALIASES: &[&str] = &["country", "entity", "location"];
const YEAR_ALIASES: &[&str] = &["year"];
const TOTAL_ALIASES: &[&str] = &["totalconsumption", "total", "totalmeat"];

/// Column positions resolved from the header row.
struct Columns {
    country: usize,
    year: usize,
    meats: [usize; 6],
    total: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |aliases: &[&str], name: &str| -> Result<usize> {
            normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };

        let mut meats = [0usize; 6];
        for (slot, meat) in meats.iter_mut().zip(MeatType::ALL) {
            *slot = find(meat.header_aliases(), meat.label())?;
        }
        Ok(Self {
            country: find(COUNTRY_ALIASES, "Country")?,
            year: find(YEAR_ALIASES, "Year")?,
            meats,
            total: find(TOTAL_ALIASES, "TotalConsumption")?,
        })
    }
}

fn parse_amount(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_row(r: &csv::StringRecord, cols: &Columns) -> Option<ConsumptionRecord> {
    let country = r.get(cols.country).unwrap_or("").trim();
    if country.is_empty() {
        return None;
    }
    let year: i32 = r.get(cols.year).unwrap_or("").trim().parse().ok()?;

    let mut values = MeatValues::default();
    for (meat, &col) in MeatType::ALL.iter().zip(cols.meats.iter()) {
        values.set(*meat, parse_amount(r.get(col).unwrap_or(""))?);
    }

    let total_str = r.get(cols.total).unwrap_or("").trim();
    let total = if total_str.is_empty() {
        values.sum()
    } else {
        parse_amount(total_str)?
    };

    Some(ConsumptionRecord::new(country, year, values, total))
}

impl Dataset {
    /// Load a dataset from CSV text.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load a dataset from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let cols = Columns::resolve(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            match parse_row(&r, &cols) {
                Some(record) => records.push(record),
                None => {
                    log::warn!("[GMC] loader: skipping unusable row {:?}", r.position().map(|p| p.line()));
                    skipped += 1;
                }
            }
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        log::info!("[GMC] loader: Loaded {} records, skipped {}", records.len(), skipped);
        Self::from_records(records)
    }

    /// Load a dataset from a CSV file; `.gz` files are decompressed first.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if gzipped {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }
}
