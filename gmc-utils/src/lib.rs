//! Shared utility functions for GMC crates.

/// Numeric formatting helpers
pub mod numbers {
    /// Format a value in thousands with two decimals and a `K` suffix.
    ///
    /// `75.1` becomes `"0.08K"`, `1234.5` becomes `"1.23K"`. Exact ties
    /// round to even: `125.0` becomes `"0.12K"`.
    pub fn thousands_label(value: f64) -> String {
        format!("{:.2}K", value / 1000.0)
    }

    /// Arithmetic mean, or `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_thousands_label() {
            assert_eq!(thousands_label(75.1), "0.08K");
            assert_eq!(thousands_label(1234.5), "1.23K");
            assert_eq!(thousands_label(0.0), "0.00K");
        }

        #[test]
        fn test_thousands_label_ties_round_to_even() {
            assert_eq!(thousands_label(125.0), "0.12K");
            assert_eq!(thousands_label(625.0), "0.62K");
            assert_eq!(thousands_label(2125.0), "2.12K");
        }

        #[test]
        fn test_mean() {
            assert_eq!(mean(&[]), None);
            assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
        }
    }
}

/// CSV header helpers
pub mod headers {
    /// Normalize a column header for lookup: lowercase ASCII alphanumerics only.
    ///
    /// `"Sheep and goat"`, `"SheepAndGoat"` and `"sheep_and_goat"` all map to
    /// `"sheepandgoat"`.
    pub fn normalize_header(header: &str) -> String {
        header
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normalize_header() {
            assert_eq!(normalize_header("Sheep and goat"), "sheepandgoat");
            assert_eq!(normalize_header("SheepAndGoat"), "sheepandgoat");
            assert_eq!(normalize_header(" sheep_and_goat "), "sheepandgoat");
            assert_eq!(normalize_header("Fish & Seafood"), "fishseafood");
        }
    }
}
