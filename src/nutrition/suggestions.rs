//! Serving-size guidance
//!
//! Picks a guidance category from the food name and returns advice for
//! cutting, bulking and maintenance goals.

use serde::Serialize;

/// Broad food category used to pick guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Greens,
    CalorieDense,
    Protein,
    Fruit,
    Balanced,
}

/// Checked in order; first hit wins
const CATEGORY_CHAIN: &[(&[&str], SuggestionCategory)] = &[
    (&["salad", "vegetable", "green"], SuggestionCategory::Greens),
    (&["pizza", "burger"], SuggestionCategory::CalorieDense),
    (&["chicken", "protein"], SuggestionCategory::Protein),
    (&["fruit", "apple"], SuggestionCategory::Fruit),
];

impl SuggestionCategory {
    pub fn detect(food_name: &str) -> Self {
        let lower = food_name.to_lowercase();
        CATEGORY_CHAIN
            .iter()
            .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
            .map(|(_, category)| *category)
            .unwrap_or(SuggestionCategory::Balanced)
    }

    fn general(&self) -> &'static str {
        match self {
            SuggestionCategory::Greens => {
                "This nutrient-dense option is excellent for overall health. Consider adding 1-2 more servings to boost fiber intake and enhance satiety while maintaining your wellness goals."
            }
            SuggestionCategory::CalorieDense => {
                "This calorie-dense food can fit into your goals with smart portioning. Consider reducing to 0.5-0.75 servings and adding nutrient-dense sides."
            }
            SuggestionCategory::Protein => {
                "Excellent protein choice for muscle maintenance and growth. This serving size works well, though you might adjust based on your specific protein targets."
            }
            SuggestionCategory::Fruit => {
                "Natural source of vitamins and energy. You can safely have 1-2 more servings as snacks throughout the day, timing them around your activity levels."
            }
            SuggestionCategory::Balanced => {
                "Based on the nutritional profile, this portion appears well-balanced. Adjust by ±0.5 servings based on your daily targets and hunger levels."
            }
        }
    }

    /// Advice for cutting, bulking and maintenance, in that order
    fn specific(&self) -> [&'static str; 3] {
        match self {
            SuggestionCategory::Greens => [
                "For cutting: Perfect base - add lean protein like grilled chicken",
                "For bulking: Add healthy fats like avocado, nuts, or olive oil drizzle",
                "For maintenance: Ideal portion - pair with complex carbs for balance",
            ],
            SuggestionCategory::CalorieDense => [
                "For cutting: Limit to half portion, add large side salad",
                "For bulking: Full serving is fine, add protein shake or Greek yogurt",
                "For maintenance: 0.75 serving with vegetables works well",
            ],
            SuggestionCategory::Protein => [
                "For cutting: Perfect amount - high protein, low calories",
                "For bulking: Consider 1.5x serving size for higher protein intake",
                "For maintenance: Ideal portion - pair with carbs and vegetables",
            ],
            SuggestionCategory::Fruit => [
                "For cutting: Great low-calorie snack - have 1-2 more servings",
                "For bulking: Add nut butter or nuts for healthy calories",
                "For maintenance: Perfect as-is for natural energy",
            ],
            SuggestionCategory::Balanced => [
                "For cutting: Monitor portion size, pair with low-calorie vegetables",
                "For bulking: Increase by 0.5-1 serving or add calorie-dense sides",
                "For maintenance: Current portion looks optimal",
            ],
        }
    }
}

/// Serving guidance for one food
#[derive(Debug, Clone, Serialize)]
pub struct ServingSuggestions {
    pub category: SuggestionCategory,
    pub general: &'static str,
    pub specific: [&'static str; 3],
}

pub fn serving_suggestions(food_name: &str) -> ServingSuggestions {
    let category = SuggestionCategory::detect(food_name);
    ServingSuggestions {
        category,
        general: category.general(),
        specific: category.specific(),
    }
}
