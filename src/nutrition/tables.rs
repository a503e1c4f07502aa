//! Static nutrition tables
//!
//! Read-only data compiled into the binary. Values are per typical serving.

use crate::models::Nutrition;

// ============================================================================
// Ingredient Keywords (matched inside free text)
// ============================================================================

/// Ingredient and dish keywords, in declaration order
pub const INGREDIENT_TABLE: &[(&str, Nutrition)] = &[
    // Proteins
    ("chicken", Nutrition::new(165.0, 0.0, 31.0, 3.6, 0.0, 0.0)),
    ("salmon", Nutrition::new(208.0, 0.0, 22.0, 12.0, 0.0, 0.0)),
    ("egg", Nutrition::new(155.0, 1.1, 13.0, 11.0, 0.0, 1.1)),
    ("beef", Nutrition::new(250.0, 0.0, 26.0, 15.0, 0.0, 0.0)),
    // Carbs
    ("rice", Nutrition::new(130.0, 28.0, 2.7, 0.3, 0.4, 0.1)),
    ("pasta", Nutrition::new(220.0, 44.0, 8.0, 1.3, 2.5, 1.0)),
    ("bread", Nutrition::new(265.0, 49.0, 9.0, 3.2, 2.7, 5.7)),
    ("potato", Nutrition::new(161.0, 37.0, 4.3, 0.2, 2.2, 1.7)),
    ("quinoa", Nutrition::new(222.0, 39.0, 8.0, 3.6, 5.2, 1.6)),
    // Vegetables
    ("broccoli", Nutrition::new(34.0, 7.0, 2.8, 0.4, 2.6, 1.5)),
    ("spinach", Nutrition::new(23.0, 3.6, 2.9, 0.4, 2.2, 0.4)),
    ("carrot", Nutrition::new(41.0, 10.0, 0.9, 0.2, 2.8, 4.7)),
    ("tomato", Nutrition::new(18.0, 3.9, 0.9, 0.2, 1.2, 2.6)),
    // Fruits
    ("apple", Nutrition::new(52.0, 14.0, 0.3, 0.2, 2.4, 10.0)),
    ("banana", Nutrition::new(89.0, 23.0, 1.1, 0.3, 2.6, 12.0)),
    ("orange", Nutrition::new(47.0, 12.0, 0.9, 0.1, 2.4, 9.4)),
    // Popular dishes
    ("pizza", Nutrition::new(285.0, 36.0, 12.0, 10.0, 2.3, 3.8)),
    ("burger", Nutrition::new(540.0, 40.0, 25.0, 31.0, 3.0, 5.0)),
    ("salad", Nutrition::new(65.0, 11.0, 5.0, 0.3, 4.0, 6.0)),
    ("sandwich", Nutrition::new(300.0, 33.0, 15.0, 12.0, 4.0, 4.0)),
];

// ============================================================================
// Meal-Time Fallbacks (used when no keyword matched)
// ============================================================================

pub const BREAKFAST_ESTIMATE: Nutrition = Nutrition::new(350.0, 45.0, 15.0, 12.0, 5.0, 8.0);
pub const LUNCH_ESTIMATE: Nutrition = Nutrition::new(450.0, 50.0, 25.0, 15.0, 8.0, 10.0);
pub const DINNER_ESTIMATE: Nutrition = Nutrition::new(550.0, 40.0, 35.0, 20.0, 10.0, 8.0);
pub const GENERIC_ESTIMATE: Nutrition = Nutrition::new(300.0, 35.0, 20.0, 10.0, 5.0, 8.0);

// ============================================================================
// Dish Names (exact lookup)
// ============================================================================

/// Dish names keyed exactly as classifier labels spell them
pub const DISH_TABLE: &[(&str, Nutrition)] = &[
    ("burger", Nutrition::new(295.0, 30.0, 17.0, 14.0, 3.0, 5.0)),
    ("butter_naan", Nutrition::new(320.0, 42.0, 6.0, 14.0, 2.0, 2.0)),
    ("chai", Nutrition::new(120.0, 15.0, 3.0, 5.0, 0.0, 12.0)),
    ("chapati", Nutrition::new(104.0, 18.0, 3.0, 2.0, 2.0, 1.0)),
    ("chole_bhature", Nutrition::new(427.0, 45.0, 10.0, 22.0, 5.0, 3.0)),
    ("dal_makhani", Nutrition::new(210.0, 25.0, 10.0, 8.0, 7.0, 2.0)),
    ("dhokla", Nutrition::new(160.0, 25.0, 6.0, 6.0, 1.0, 2.0)),
    ("idli", Nutrition::new(58.0, 12.0, 2.0, 0.4, 1.0, 0.0)),
    ("jalebi", Nutrition::new(150.0, 30.0, 1.0, 5.0, 0.0, 25.0)),
    ("kadai_paneer", Nutrition::new(280.0, 15.0, 12.0, 20.0, 2.0, 4.0)),
    ("masala_dosa", Nutrition::new(232.0, 35.0, 6.0, 10.0, 3.0, 1.0)),
    ("paani_puri", Nutrition::new(150.0, 22.0, 2.0, 6.0, 1.0, 2.0)),
    ("pav_bhaji", Nutrition::new(400.0, 50.0, 8.0, 18.0, 6.0, 3.0)),
    ("pizza", Nutrition::new(266.0, 33.0, 11.0, 10.0, 2.0, 4.0)),
    ("samosa", Nutrition::new(262.0, 32.0, 5.0, 13.0, 2.0, 1.0)),
    ("salad", Nutrition::new(65.0, 11.0, 5.0, 0.3, 4.0, 6.0)),
    ("chicken", Nutrition::new(165.0, 0.0, 31.0, 3.6, 0.0, 0.0)),
];

/// Returned by the exact lookup when the name is not in `DISH_TABLE`
pub const DISH_DEFAULT: Nutrition = Nutrition::new(200.0, 20.0, 10.0, 10.0, 2.0, 5.0);

/// Sample descriptions offered to users of the text entry flow
pub const SAMPLE_DESCRIPTIONS: &[&str] = &[
    "Grilled chicken breast with quinoa and vegetables",
    "Large pepperoni pizza slice",
    "Greek yogurt with berries and granola",
    "Avocado toast with scrambled eggs",
];
