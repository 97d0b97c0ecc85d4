//! Selection-driven aggregation of meat consumption data into chart series.
//!
//! Every user interaction (a year slider change or a map click) becomes one
//! immutable [`Selection`], and one call to [`recompute`] turns the shared
//! dataset plus that selection into a [`DerivedView`]: the map, bar, line and
//! pie series and the summary card. [`DashboardSession`] is the event layer
//! that merges the two input signals and publishes views last-write-wins.
//!
//! ```rust
//! use gmc_core::Dataset;
//! use gmc_data::{recompute_default, Summary};
//!
//! let csv = "\
//! Country,Year,Poultry,Beef,Pork,SheepAndGoat,FishAndSeafood,OtherMeats,TotalConsumption
//! France,2020,18.3,14.2,30.1,2.5,9.0,1.0,75.1
//! Germany,2020,16.0,12.0,35.0,1.0,7.0,0.5,71.5
//! ";
//! let dataset = Dataset::from_csv_str(csv).unwrap();
//! let view = recompute_default(&dataset, 2020, Some("France"));
//! assert_eq!(view.pie_values(), vec![18.3, 14.2, 30.1, 2.5, 9.0, 1.0]);
//! assert_eq!(
//!     view.summary,
//!     Summary::Resolved {
//!         country: "France".to_string(),
//!         year: 2020,
//!         total_consumption_k: "0.08K".to_string(),
//!     }
//! );
//! ```

pub mod config;
pub mod models;
mod recompute;
pub mod selection;
pub mod session;

pub use config::{DashboardConfig, DefaultCountryRule};
pub use models::{BarEntry, DerivedView, LinePoint, MapPoint, PieSlice, Summary};
pub use recompute::{recompute, recompute_default};
pub use selection::Selection;
pub use session::{DashboardSession, Published, SelectionEvent};

#[cfg(test)]
mod tests {
    use super::*;
    use gmc_core::Dataset;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shared_types_are_send_and_sync() {
        assert_send_sync::<Dataset>();
        assert_send_sync::<DerivedView>();
        assert_send_sync::<Selection>();
    }
}
