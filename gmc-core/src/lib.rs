//! Core types and dataset loader for per-country, per-year meat consumption data.
//!
//! The [`Dataset`] is built once (usually from CSV via the loader methods),
//! wrapped in an `Arc`, and lent to every recompute without being copied.
//!
//! ```rust
//! use gmc_core::{Dataset, MeatType};
//!
//! let csv = "\
//! Country,Year,Poultry,Beef,Pork,SheepAndGoat,FishAndSeafood,OtherMeats,TotalConsumption
//! France,2020,18.3,14.2,30.1,2.5,9.0,1.0,75.1
//! ";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//! let france = dataset.get("France", 2020).unwrap();
//! assert_eq!(france.values.get(MeatType::Pork), 30.1);
//! ```

pub mod dataset;
pub mod error;
mod loader;
pub mod meat_type;
pub mod record;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use meat_type::{MeatType, MeatValues};
pub use record::ConsumptionRecord;
