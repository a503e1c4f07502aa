//! Free-text nutrition estimation
//!
//! Models a meal as the sum of every recognized ingredient keyword, falls back
//! to a meal-time estimate when nothing is recognized, then scales the total by
//! a single portion multiplier and rounds.

use serde::{Deserialize, Serialize};

use super::tables::{
    BREAKFAST_ESTIMATE, DINNER_ESTIMATE, GENERIC_ESTIMATE, INGREDIENT_TABLE, LUNCH_ESTIMATE,
};
use crate::models::{Nutrition, NutritionRecord};

/// How ingredient keywords are matched against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Keyword may appear anywhere, even inside a longer word ("egg" in "veggie")
    #[default]
    Substring,
    /// Keyword must be a whole word, optionally with a plural `s`/`es`
    WordBoundary,
}

impl MatchMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Some(MatchMode::Substring),
            "word" | "word_boundary" | "word-boundary" => Some(MatchMode::WordBoundary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::WordBoundary => "word_boundary",
        }
    }

    fn matches(&self, normalized: &str, keyword: &str) -> bool {
        match self {
            MatchMode::Substring => normalized.contains(keyword),
            MatchMode::WordBoundary => normalized
                .split(|c: char| !c.is_alphanumeric())
                .filter_map(|token| token.strip_prefix(keyword))
                .any(|rest| matches!(rest, "" | "s" | "es")),
        }
    }
}

/// Meal-time estimate used when no ingredient keyword matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealBucket {
    Breakfast,
    Lunch,
    Dinner,
    Generic,
}

/// Checked in order; first hit wins
const MEAL_CHAIN: &[(&str, MealBucket)] = &[
    ("breakfast", MealBucket::Breakfast),
    ("lunch", MealBucket::Lunch),
    ("dinner", MealBucket::Dinner),
];

impl MealBucket {
    pub fn detect(normalized: &str) -> Self {
        MEAL_CHAIN
            .iter()
            .find(|(word, _)| normalized.contains(word))
            .map(|(_, bucket)| *bucket)
            .unwrap_or(MealBucket::Generic)
    }

    pub fn nutrition(&self) -> Nutrition {
        match self {
            MealBucket::Breakfast => BREAKFAST_ESTIMATE,
            MealBucket::Lunch => LUNCH_ESTIMATE,
            MealBucket::Dinner => DINNER_ESTIMATE,
            MealBucket::Generic => GENERIC_ESTIMATE,
        }
    }
}

/// Portion size inferred from descriptive words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionSize {
    ExtraLarge,
    Large,
    Small,
    #[default]
    Regular,
}

/// Most specific phrase first: "extra large" must win over "large"
const PORTION_CHAIN: &[(&[&str], PortionSize)] = &[
    (&["extra large", "jumbo"], PortionSize::ExtraLarge),
    (&["large", "big"], PortionSize::Large),
    (&["small", "mini"], PortionSize::Small),
];

impl PortionSize {
    pub fn detect(normalized: &str) -> Self {
        PORTION_CHAIN
            .iter()
            .find(|(words, _)| words.iter().any(|w| normalized.contains(w)))
            .map(|(_, size)| *size)
            .unwrap_or_default()
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PortionSize::ExtraLarge => 2.0,
            PortionSize::Large => 1.5,
            PortionSize::Small => 0.7,
            PortionSize::Regular => 1.0,
        }
    }
}

/// Full result of an estimate, including how it was reached
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub record: NutritionRecord,
    /// Keywords that matched, in table order
    pub matched_ingredients: Vec<&'static str>,
    /// Set only when no keyword matched
    pub meal_fallback: Option<MealBucket>,
    pub portion: PortionSize,
    pub multiplier: f64,
    pub match_mode: MatchMode,
}

/// Estimate nutrition for a free-text food description
///
/// Never fails: unrecognized text falls back to a meal-time estimate.
pub fn estimate(text: &str) -> NutritionRecord {
    analyze(text, MatchMode::Substring).record
}

/// Estimate nutrition and report which rules fired
pub fn analyze(text: &str, mode: MatchMode) -> Analysis {
    let normalized = text.to_lowercase();

    let mut matched_ingredients = Vec::new();
    let mut total = Nutrition::zero();
    for (keyword, nutrition) in INGREDIENT_TABLE {
        if mode.matches(&normalized, keyword) {
            matched_ingredients.push(*keyword);
            total = total + *nutrition;
        }
    }

    let meal_fallback = if matched_ingredients.is_empty() {
        let bucket = MealBucket::detect(&normalized);
        total = bucket.nutrition();
        Some(bucket)
    } else {
        None
    };

    let portion = PortionSize::detect(&normalized);
    let multiplier = portion.multiplier();
    let rounded = (total * multiplier).round();

    tracing::debug!(
        matched = ?matched_ingredients,
        fallback = ?meal_fallback,
        ?portion,
        "Estimated nutrition for '{}'",
        text
    );

    Analysis {
        record: NutritionRecord::new(text, rounded),
        matched_ingredients,
        meal_fallback,
        portion,
        multiplier,
        match_mode: mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(r: &NutritionRecord) -> [f64; 6] {
        [r.calories, r.carbs, r.protein, r.fat, r.fiber, r.sugar]
    }

    #[test]
    fn test_single_keyword_unscaled() {
        let r = estimate("Grilled salmon");
        assert_eq!(r.food_name, "Grilled salmon");
        assert_eq!(values(&r), [208.0, 0.0, 22.0, 12.0, 0.0, 0.0]);

        // 1.1 rounds down
        let r = estimate("boiled egg");
        assert_eq!(values(&r), [155.0, 1.0, 13.0, 11.0, 0.0, 1.0]);
    }

    #[test]
    fn test_keywords_are_summed() {
        let r = estimate("chicken and rice");
        assert_eq!(values(&r), [295.0, 28.0, 34.0, 4.0, 0.0, 0.0]);

        let a = analyze("chicken and rice", MatchMode::Substring);
        assert_eq!(a.matched_ingredients, vec!["chicken", "rice"]);
        assert_eq!(a.meal_fallback, None);
    }

    #[test]
    fn test_keyword_order_in_text_does_not_matter() {
        assert_eq!(
            values(&estimate("rice with chicken")),
            values(&estimate("chicken with rice"))
        );
    }

    #[test]
    fn test_generic_fallback() {
        let r = estimate("something tasty");
        assert_eq!(values(&r), [300.0, 35.0, 20.0, 10.0, 5.0, 8.0]);
        let a = analyze("something tasty", MatchMode::Substring);
        assert_eq!(a.meal_fallback, Some(MealBucket::Generic));
    }

    #[test]
    fn test_meal_fallbacks() {
        assert_eq!(values(&estimate("My Breakfast")), [350.0, 45.0, 15.0, 12.0, 5.0, 8.0]);
        assert_eq!(values(&estimate("office lunch")), [450.0, 50.0, 25.0, 15.0, 8.0, 10.0]);
        assert_eq!(values(&estimate("late dinner")), [550.0, 40.0, 35.0, 20.0, 10.0, 8.0]);
        // breakfast is checked before dinner
        assert_eq!(
            values(&estimate("breakfast for dinner")),
            [350.0, 45.0, 15.0, 12.0, 5.0, 8.0]
        );
    }

    #[test]
    fn test_keyword_beats_meal_word() {
        let a = analyze("banana for breakfast", MatchMode::Substring);
        assert_eq!(a.meal_fallback, None);
        assert_eq!(a.record.calories, 89.0);
    }

    #[test]
    fn test_empty_input_uses_generic() {
        for text in ["", "   "] {
            let r = estimate(text);
            assert_eq!(r.food_name, text);
            assert_eq!(values(&r), [300.0, 35.0, 20.0, 10.0, 5.0, 8.0]);
        }
    }

    #[test]
    fn test_extra_large_beats_large() {
        let a = analyze("extra large pizza", MatchMode::Substring);
        assert_eq!(a.portion, PortionSize::ExtraLarge);
        assert_eq!(values(&a.record), [570.0, 72.0, 24.0, 20.0, 5.0, 8.0]);

        let a = analyze("jumbo pizza", MatchMode::Substring);
        assert_eq!(a.record.calories, 570.0);
    }

    #[test]
    fn test_large_and_small_portions() {
        let r = estimate("Large pepperoni pizza slice");
        assert_eq!(r.calories, (285.0_f64 * 1.5).round());
        assert_eq!(r.carbs, 54.0);

        let r = estimate("a big something");
        assert_eq!(values(&r), [450.0, 53.0, 30.0, 15.0, 8.0, 12.0]);

        let r = estimate("mini burger");
        assert_eq!(r.calories, (540.0_f64 * 0.7).round());
        assert_eq!(r.fat, (31.0_f64 * 0.7).round());
    }

    #[test]
    fn test_portion_priority_is_fixed() {
        assert_eq!(PortionSize::detect("large and small"), PortionSize::Large);
        assert_eq!(PortionSize::detect("small jumbo"), PortionSize::ExtraLarge);
        assert_eq!(PortionSize::detect("mini"), PortionSize::Small);
        assert_eq!(PortionSize::detect("medium"), PortionSize::Regular);
    }

    #[test]
    fn test_input_text_preserved() {
        let text = "  Avocado TOAST with Scrambled Eggs ";
        assert_eq!(estimate(text).food_name, text);
    }

    #[test]
    fn test_idempotent() {
        let text = "Greek yogurt with berries and granola";
        assert_eq!(estimate(text), estimate(text));
    }

    #[test]
    fn test_substring_double_counts() {
        // "egg" inside "veggie" counts in substring mode only
        let sub = analyze("veggie burger", MatchMode::Substring);
        assert_eq!(sub.matched_ingredients, vec!["egg", "burger"]);
        assert_eq!(sub.record.calories, 695.0);

        let word = analyze("veggie burger", MatchMode::WordBoundary);
        assert_eq!(word.matched_ingredients, vec!["burger"]);
        assert_eq!(word.record.calories, 540.0);
    }

    #[test]
    fn test_word_boundary_plurals() {
        let a = analyze("scrambled eggs, two tomatoes", MatchMode::WordBoundary);
        assert_eq!(a.matched_ingredients, vec!["egg", "tomato"]);

        let a = analyze("eggplant", MatchMode::WordBoundary);
        assert!(a.matched_ingredients.is_empty());
        assert_eq!(a.meal_fallback, Some(MealBucket::Generic));
    }

    #[test]
    fn test_match_mode_from_str() {
        assert_eq!(MatchMode::from_str("substring"), Some(MatchMode::Substring));
        assert_eq!(MatchMode::from_str(" Word "), Some(MatchMode::WordBoundary));
        assert_eq!(MatchMode::from_str("word_boundary"), Some(MatchMode::WordBoundary));
        assert_eq!(MatchMode::from_str("fuzzy"), None);
    }
}
