//! Data models
//!
//! Value types shared by the estimator, the lookup table and the MCP tools.

mod classifier;
mod nutrition;

pub use classifier::{ClassifierError, ANALYSIS_FAILED_MESSAGE, UNKNOWN_FOOD};
pub use nutrition::{Nutrition, NutritionRecord};
