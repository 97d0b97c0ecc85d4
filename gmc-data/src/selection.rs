use serde::{Deserialize, Serialize};

/// The merged UI inputs for one recompute.
///
/// Built fresh for every interaction so a recompute never sees a year from
/// one event and a country from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: i32,
    /// Country from the last map click; `None` means use the default rule
    pub country: Option<String>,
}

impl Selection {
    pub fn new(year: i32, country: Option<&str>) -> Self {
        Self {
            year,
            country: country.map(String::from),
        }
    }

    pub fn with_year(&self, year: i32) -> Self {
        Self {
            year,
            country: self.country.clone(),
        }
    }

    pub fn with_country(&self, country: Option<String>) -> Self {
        Self {
            year: self.year,
            country,
        }
    }
}
