//! Nutrition estimation module
//!
//! Free-text estimation, exact dish lookup, and serving guidance over static tables.

pub mod estimator;
pub mod lookup;
pub mod suggestions;
pub mod tables;

pub use estimator::{analyze, estimate, Analysis, MatchMode, MealBucket, PortionSize};
pub use lookup::{lookup_by_name, lookup_match, LookupResult};
pub use suggestions::{serving_suggestions, ServingSuggestions, SuggestionCategory};
