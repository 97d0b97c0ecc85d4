use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed meat consumption categories.
///
/// The declaration order is the canonical order used for pie slices,
/// stacked bars and CSV columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatType {
    Poultry,
    Beef,
    Pork,
    SheepAndGoat,
    FishAndSeafood,
    OtherMeats,
}

impl MeatType {
    /// All meat types in canonical order.
    pub const ALL: [MeatType; 6] = [
        MeatType::Poultry,
        MeatType::Beef,
        MeatType::Pork,
        MeatType::SheepAndGoat,
        MeatType::FishAndSeafood,
        MeatType::OtherMeats,
    ];

    /// Human readable label for chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            MeatType::Poultry => "Poultry",
            MeatType::Beef => "Beef",
            MeatType::Pork => "Pork",
            MeatType::SheepAndGoat => "Sheep and goat",
            MeatType::FishAndSeafood => "Fish and seafood",
            MeatType::OtherMeats => "Other meats",
        }
    }

    /// Normalized CSV header names accepted for this column.
    pub(crate) fn header_aliases(&self) -> &'static [&'static str] {
        match self {
            MeatType::Poultry => &["poultry"],
            MeatType::Beef => &["beef", "beefandbuffalo"],
            MeatType::Pork => &["pork", "pigmeat"],
            MeatType::SheepAndGoat => &["sheepandgoat", "muttonandgoat", "sheepgoat"],
            MeatType::FishAndSeafood => &["fishandseafood", "fishseafood", "seafood"],
            MeatType::OtherMeats => &["othermeats", "othermeat", "other"],
        }
    }
}

impl fmt::Display for MeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-capita consumption (kg) for each meat type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeatValues {
    pub poultry: f64,
    pub beef: f64,
    pub pork: f64,
    pub sheep_and_goat: f64,
    pub fish_and_seafood: f64,
    pub other_meats: f64,
}

impl MeatValues {
    /// Build from values in canonical [`MeatType::ALL`] order.
    pub fn from_array(values: [f64; 6]) -> Self {
        let [poultry, beef, pork, sheep_and_goat, fish_and_seafood, other_meats] = values;
        Self {
            poultry,
            beef,
            pork,
            sheep_and_goat,
            fish_and_seafood,
            other_meats,
        }
    }

    /// Values in canonical [`MeatType::ALL`] order.
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.poultry,
            self.beef,
            self.pork,
            self.sheep_and_goat,
            self.fish_and_seafood,
            self.other_meats,
        ]
    }

    pub fn get(&self, meat: MeatType) -> f64 {
        match meat {
            MeatType::Poultry => self.poultry,
            MeatType::Beef => self.beef,
            MeatType::Pork => self.pork,
            MeatType::SheepAndGoat => self.sheep_and_goat,
            MeatType::FishAndSeafood => self.fish_and_seafood,
            MeatType::OtherMeats => self.other_meats,
        }
    }

    pub fn set(&mut self, meat: MeatType, value: f64) {
        let slot = match meat {
            MeatType::Poultry => &mut self.poultry,
            MeatType::Beef => &mut self.beef,
            MeatType::Pork => &mut self.pork,
            MeatType::SheepAndGoat => &mut self.sheep_and_goat,
            MeatType::FishAndSeafood => &mut self.fish_and_seafood,
            MeatType::OtherMeats => &mut self.other_meats,
        };
        *slot = value;
    }

    /// Sum of all six categories.
    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Element-wise addition, used when grouping rows.
    pub fn add(&self, other: &MeatValues) -> MeatValues {
        let a = self.to_array();
        let b = other.to_array();
        MeatValues::from_array(std::array::from_fn(|i| a[i] + b[i]))
    }

    /// Iterate `(meat type, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (MeatType, f64)> {
        MeatType::ALL.into_iter().zip(self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let values = MeatValues::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(values.get(MeatType::Poultry), 1.0);
        assert_eq!(values.get(MeatType::SheepAndGoat), 4.0);
        assert_eq!(values.get(MeatType::OtherMeats), 6.0);
        assert_eq!(values.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_set_and_sum() {
        let mut values = MeatValues::default();
        values.set(MeatType::Pork, 30.0);
        values.set(MeatType::Beef, 12.5);
        assert_eq!(values.pork, 30.0);
        assert_eq!(values.get(MeatType::Beef), 12.5);
        assert_eq!(values.poultry, 0.0);
        assert_eq!(values.sum(), 42.5);
    }

    #[test]
    fn test_add() {
        let a = MeatValues::from_array([1.0; 6]);
        let b = MeatValues::from_array([0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(a.add(&b).to_array(), [1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn test_iter_pairs_types_with_values() {
        let values = MeatValues::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let pairs: Vec<(MeatType, f64)> = values.iter().collect();
        assert_eq!(pairs[0], (MeatType::Poultry, 1.0));
        assert_eq!(pairs[4], (MeatType::FishAndSeafood, 5.0));
    }
}
