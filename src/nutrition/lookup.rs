//! Exact dish-name lookup
//!
//! Used for labels that are already identified (e.g. from the image
//! classifier). No summation, no portion scaling, no rounding.

use serde::Serialize;

use super::tables::{DISH_DEFAULT, DISH_TABLE};
use crate::models::NutritionRecord;

/// Result of a lookup, noting whether the table had the name
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub record: NutritionRecord,
    pub matched: bool,
}

/// Look up a dish by its exact (case-insensitive) name
pub fn lookup_match(name: &str) -> LookupResult {
    let key = name.to_lowercase();
    let found = DISH_TABLE.iter().find(|(dish, _)| *dish == key);

    match found {
        Some((_, nutrition)) => LookupResult {
            record: NutritionRecord::new(name, *nutrition),
            matched: true,
        },
        None => {
            tracing::debug!("No dish named '{}', using default", name);
            LookupResult {
                record: NutritionRecord::new(name, DISH_DEFAULT),
                matched: false,
            }
        }
    }
}

/// Look up a dish by name, falling back to a fixed default record
pub fn lookup_by_name(name: &str) -> NutritionRecord {
    lookup_match(name).record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(r: &NutritionRecord) -> [f64; 6] {
        [r.calories, r.carbs, r.protein, r.fat, r.fiber, r.sugar]
    }

    #[test]
    fn test_exact_match() {
        let r = lookup_by_name("burger");
        assert_eq!(r.food_name, "burger");
        assert_eq!(values(&r), [295.0, 30.0, 17.0, 14.0, 3.0, 5.0]);
    }

    #[test]
    fn test_case_insensitive_keeps_name() {
        let result = lookup_match("Masala_Dosa");
        assert!(result.matched);
        assert_eq!(result.record.food_name, "Masala_Dosa");
        assert_eq!(result.record.calories, 232.0);
    }

    #[test]
    fn test_values_not_rounded() {
        assert_eq!(lookup_by_name("idli").fat, 0.4);
        assert_eq!(lookup_by_name("salad").fat, 0.3);
    }

    #[test]
    fn test_no_substring_or_scaling() {
        for name in ["chicken burger", "large pizza", "butter naan", " burger"] {
            let result = lookup_match(name);
            assert!(!result.matched, "{} should not match", name);
            assert_eq!(values(&result.record), [200.0, 20.0, 10.0, 10.0, 2.0, 5.0]);
        }
    }

    #[test]
    fn test_unknown_name_default() {
        let r = lookup_by_name("spaghetti");
        assert_eq!(r.food_name, "spaghetti");
        assert_eq!(values(&r), [200.0, 20.0, 10.0, 10.0, 2.0, 5.0]);
    }
}
