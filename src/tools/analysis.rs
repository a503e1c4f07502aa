//! Nutrition Analysis MCP Tools
//!
//! Tools for estimating, looking up and ingesting nutrition records.

use serde::Serialize;

use crate::config::Config;
use crate::models::NutritionRecord;
use crate::nutrition::tables::{DISH_TABLE, INGREDIENT_TABLE, SAMPLE_DESCRIPTIONS};
use crate::nutrition::{self, Analysis, LookupResult, ServingSuggestions};

/// Response for estimate_nutrition
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub analyzed_at: String,
}

/// Estimate nutrition for free text, then hold the result for the configured
/// analysis delay before handing it back
pub async fn estimate_nutrition(config: &Config, text: &str) -> EstimateResponse {
    let analysis = nutrition::analyze(text, config.match_mode);
    let analyzed_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let delay = config.analysis_delay();
    if !delay.is_zero() {
        tracing::debug!("Holding estimate for {} ms", config.analysis_delay_ms);
        tokio::time::sleep(delay).await;
    }

    tracing::info!(
        "Estimated '{}': {} kcal ({} ingredients matched)",
        text,
        analysis.record.calories,
        analysis.matched_ingredients.len()
    );

    EstimateResponse {
        analysis,
        analyzed_at,
    }
}

pub fn lookup_nutrition(name: &str) -> LookupResult {
    nutrition::lookup_match(name)
}

pub fn serving_suggestions(food_name: &str) -> ServingSuggestions {
    nutrition::serving_suggestions(food_name)
}

/// Response for ingest_classifier_reply
#[derive(Debug, Serialize)]
pub struct IngestClassifierResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<NutritionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Turn a raw classifier reply into a record, or a single generic failure
pub fn ingest_classifier_reply(raw: &str) -> IngestClassifierResponse {
    match NutritionRecord::from_classifier_reply(raw) {
        Ok(record) => {
            tracing::info!("Classifier identified '{}'", record.food_name);
            IngestClassifierResponse {
                success: true,
                record: Some(record),
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("Rejected classifier reply: {}", e);
            IngestClassifierResponse {
                success: false,
                record: None,
                error: Some(e.user_message()),
            }
        }
    }
}

/// Response for list_known_foods
#[derive(Debug, Serialize)]
pub struct KnownFoodsResponse {
    pub ingredient_keywords: Vec<&'static str>,
    pub dish_names: Vec<&'static str>,
    pub sample_descriptions: Vec<&'static str>,
}

pub fn list_known_foods() -> KnownFoodsResponse {
    KnownFoodsResponse {
        ingredient_keywords: INGREDIENT_TABLE.iter().map(|(k, _)| *k).collect(),
        dish_names: DISH_TABLE.iter().map(|(k, _)| *k).collect(),
        sample_descriptions: SAMPLE_DESCRIPTIONS.to_vec(),
    }
}
