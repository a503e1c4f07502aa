//! Image classifier reply handling
//!
//! The classifier is an external service; only its reply is handled here.
//! A reply is either accepted whole or rejected whole.

use serde::Deserialize;
use thiserror::Error;

use super::{Nutrition, NutritionRecord};

/// Shown to the user for every rejected reply, whatever the cause
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Label used when the classifier names no food
pub const UNKNOWN_FOOD: &str = "Unknown";

/// Why a classifier reply was rejected
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier reply was empty")]
    Empty,

    #[error("No JSON object found in classifier reply")]
    NoJsonObject,

    #[error("Malformed classifier reply: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

impl ClassifierError {
    /// The single message surfaced to users; variant detail is for logs only
    pub fn user_message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }
}

#[derive(Debug, Deserialize)]
struct ClassifierReply {
    #[serde(default)]
    food: Option<String>,
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
}

impl ClassifierReply {
    fn check(&self) -> Result<(), ClassifierError> {
        let fields = [
            ("calories", self.calories),
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ClassifierError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

/// Slice from the first `{` to the last `}`, inclusive
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

impl NutritionRecord {
    /// Build a record from a raw classifier reply
    ///
    /// Accepts a bare JSON object, a JSON object wrapped in surrounding prose
    /// (e.g. a fenced code block), or either of those double-encoded as a JSON
    /// string.
    pub fn from_classifier_reply(raw: &str) -> Result<Self, ClassifierError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClassifierError::Empty);
        }

        // Some transports hand back the object as a JSON string literal
        let unwrapped = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(inner)) => inner,
            _ => trimmed.to_string(),
        };

        let object = extract_json_object(&unwrapped).ok_or(ClassifierError::NoJsonObject)?;
        let reply: ClassifierReply = serde_json::from_str(object)?;
        reply.check()?;

        let food_name = reply
            .food
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(UNKNOWN_FOOD)
            .to_string();

        Ok(NutritionRecord::new(
            food_name,
            Nutrition::new(
                reply.calories,
                reply.carbs,
                reply.protein,
                reply.fat,
                reply.fiber,
                reply.sugar,
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRYANI: &str = r#"{"food": "Chicken Biryani", "calories": 290, "carbs": 31.5, "protein": 12, "fat": 11, "fiber": 1.5, "sugar": 2}"#;

    #[test]
    fn test_plain_object() {
        let record = NutritionRecord::from_classifier_reply(BIRYANI).unwrap();
        assert_eq!(record.food_name, "Chicken Biryani");
        assert_eq!(record.calories, 290.0);
        assert_eq!(record.carbs, 31.5);
        assert_eq!(record.fiber, 1.5);
    }

    #[test]
    fn test_object_inside_prose() {
        let raw = format!("Here is the result:\n```json\n{}\n```\nEnjoy!", BIRYANI);
        let record = NutritionRecord::from_classifier_reply(&raw).unwrap();
        assert_eq!(record.food_name, "Chicken Biryani");
        assert_eq!(record.protein, 12.0);
    }

    #[test]
    fn test_double_encoded_string() {
        let raw = serde_json::to_string(BIRYANI).unwrap();
        let record = NutritionRecord::from_classifier_reply(&raw).unwrap();
        assert_eq!(record.sugar, 2.0);
    }

    #[test]
    fn test_missing_food_becomes_unknown() {
        let raw = r#"{"calories": 10, "carbs": 1, "protein": 1, "fat": 0, "fiber": 0, "sugar": 0}"#;
        let record = NutritionRecord::from_classifier_reply(raw).unwrap();
        assert_eq!(record.food_name, UNKNOWN_FOOD);

        let raw = r#"{"food": "", "calories": 10, "carbs": 1, "protein": 1, "fat": 0, "fiber": 0, "sugar": 0}"#;
        let record = NutritionRecord::from_classifier_reply(raw).unwrap();
        assert_eq!(record.food_name, UNKNOWN_FOOD);
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            NutritionRecord::from_classifier_reply("   "),
            Err(ClassifierError::Empty)
        ));
        assert!(matches!(
            NutritionRecord::from_classifier_reply("I could not identify this image."),
            Err(ClassifierError::NoJsonObject)
        ));
        assert!(matches!(
            NutritionRecord::from_classifier_reply(r#"{"food": "Soup", "calories": 100}"#),
            Err(ClassifierError::Malformed(_))
        ));
        assert!(matches!(
            NutritionRecord::from_classifier_reply(
                r#"{"food": "Soup", "calories": "lots", "carbs": 1, "protein": 1, "fat": 1, "fiber": 1, "sugar": 1}"#
            ),
            Err(ClassifierError::Malformed(_))
        ));

        let negative = r#"{"food": "Soup", "calories": 100, "carbs": 1, "protein": 1, "fat": -2, "fiber": 1, "sugar": 1}"#;
        match NutritionRecord::from_classifier_reply(negative) {
            Err(ClassifierError::InvalidValue { field, value }) => {
                assert_eq!(field, "fat");
                assert_eq!(value, -2.0);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_every_error_has_same_user_message() {
        let errors = [
            ClassifierError::Empty,
            ClassifierError::NoJsonObject,
            ClassifierError::InvalidValue { field: "fat", value: -1.0 },
        ];
        for e in errors {
            assert_eq!(e.user_message(), ANALYSIS_FAILED_MESSAGE);
        }
    }
}
