//! Shared nutrition data structures
//!
//! `Nutrition` is the unrounded working total used while estimating;
//! `NutritionRecord` is the named value handed back to callers.

use serde::{Deserialize, Serialize};

/// Nutritional values for a food or a whole meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64, // kcal
    pub carbs: f64,    // grams
    pub protein: f64,  // grams
    pub fat: f64,      // grams
    pub fiber: f64,    // grams
    pub sugar: f64,    // grams
}

impl Nutrition {
    pub const fn new(
        calories: f64,
        carbs: f64,
        protein: f64,
        fat: f64,
        fiber: f64,
        sugar: f64,
    ) -> Self {
        Self {
            calories,
            carbs,
            protein,
            fat,
            fiber,
            sugar,
        }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            carbs: self.carbs * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
        }
    }

    /// Round every field to the nearest integer, halves away from zero
    pub fn round(&self) -> Self {
        Self {
            calories: self.calories.round(),
            carbs: self.carbs.round(),
            protein: self.protein.round(),
            fat: self.fat.round(),
            fiber: self.fiber.round(),
            sugar: self.sugar.round(),
        }
    }

    fn fields(&self) -> [f64; 6] {
        [
            self.calories,
            self.carbs,
            self.protein,
            self.fat,
            self.fiber,
            self.sugar,
        ]
    }

    /// True when every field is finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.fields().iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// A named nutrition summary, created fresh for every estimate or lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    pub food_name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl NutritionRecord {
    pub fn new(food_name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            food_name: food_name.into(),
            calories: nutrition.calories,
            carbs: nutrition.carbs,
            protein: nutrition.protein,
            fat: nutrition.fat,
            fiber: nutrition.fiber,
            sugar: nutrition.sugar,
        }
    }

    /// The numeric part of the record
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(
            self.calories,
            self.carbs,
            self.protein,
            self.fat,
            self.fiber,
            self.sugar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_scale() {
        let a = Nutrition::new(165.0, 0.0, 31.0, 3.6, 0.0, 0.0);
        let b = Nutrition::new(130.0, 28.0, 2.7, 0.3, 0.4, 0.1);
        let total: Nutrition = [a, b].into_iter().sum();
        assert!((total.calories - 295.0).abs() < 0.001);
        assert!((total.protein - 33.7).abs() < 0.001);

        let doubled = total * 2.0;
        assert!((doubled.carbs - 56.0).abs() < 0.001);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let n = Nutrition::new(52.5, 7.5, 0.5, 0.49, 2.51, 0.0).round();
        assert_eq!(n, Nutrition::new(53.0, 8.0, 1.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(Nutrition::zero().is_valid());
        assert!(!Nutrition::new(-1.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Nutrition::new(f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Nutrition::new(0.0, f64::INFINITY, 0.0, 0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = NutritionRecord::new("Toast", Nutrition::new(80.0, 15.0, 3.0, 1.0, 1.0, 2.0));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["foodName"], "Toast");
        assert_eq!(json["calories"], 80.0);
        assert_eq!(record.nutrition().sugar, 2.0);
    }
}
