//! FoodCal MCP Server Implementation
//!
//! Implements the MCP server with all FoodCal tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::analysis;
use crate::tools::status::StatusTracker;

/// FoodCal MCP Service
#[derive(Clone)]
pub struct FoodCalService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<FoodCalService>,
}

impl FoodCalService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.clone()))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateNutritionParams {
    /// Free-text description of the food or meal, e.g. "large chicken salad"
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupNutritionParams {
    /// Exact dish name, e.g. "masala_dosa" (case-insensitive)
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ServingSuggestionsParams {
    /// Name of the food the advice is for
    pub food_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngestClassifierReplyParams {
    /// Raw reply text from the image classifier, unmodified
    pub reply: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FoodCalService {
    // --- Status ---

    #[tool(description = "Get the current status of the FoodCal service including build info, configuration, uptime and request counts")]
    async fn foodcal_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for choosing between the FoodCal tools and reading their results. Call this when unsure which tool fits.")]
    fn analysis_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ANALYSIS_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ANALYSIS_INSTRUCTIONS)]))
    }

    // --- Analysis ---

    #[tool(description = "Estimate calories, carbs, protein, fat, fiber and sugar from a free-text food description. Sums every recognized ingredient, falls back to a meal-time estimate, and scales by portion words (extra large/jumbo, large/big, small/mini).")]
    async fn estimate_nutrition(&self, Parameters(p): Parameters<EstimateNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = analysis::estimate_nutrition(&self.config, &p.text).await;
        self.status_tracker.lock().await.record_estimate();
        to_json(&result)
    }

    #[tool(description = "Look up nutrition for an exact dish name (e.g. burger, butter_naan, pav_bhaji). Unknown names return a default record with matched=false.")]
    async fn lookup_nutrition(&self, Parameters(p): Parameters<LookupNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = analysis::lookup_nutrition(&p.name);
        self.status_tracker.lock().await.record_lookup();
        to_json(&result)
    }

    #[tool(description = "Get serving-size advice for a food, for cutting, bulking and maintenance goals")]
    fn serving_suggestions(&self, Parameters(p): Parameters<ServingSuggestionsParams>) -> Result<CallToolResult, McpError> {
        to_json(&analysis::serving_suggestions(&p.food_name))
    }

    #[tool(description = "Convert a raw image-classifier reply into a nutrition record. Any unusable reply yields a single generic failure message.")]
    async fn ingest_classifier_reply(&self, Parameters(p): Parameters<IngestClassifierReplyParams>) -> Result<CallToolResult, McpError> {
        let result = analysis::ingest_classifier_reply(&p.reply);
        self.status_tracker.lock().await.record_classifier_reply(result.success);
        to_json(&result)
    }

    #[tool(description = "List every recognized ingredient keyword, every exact dish name, and sample food descriptions")]
    fn list_known_foods(&self) -> Result<CallToolResult, McpError> {
        to_json(&analysis::list_known_foods())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FoodCalService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "foodcal".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FoodCal AI".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FoodCal - Food nutrition estimation. \
                 Call analysis_instructions first if unsure. \
                 Free text: estimate_nutrition. Exact dish label: lookup_nutrition. \
                 Image classifier output: ingest_classifier_reply. \
                 Advice: serving_suggestions. Vocabulary: list_known_foods. \
                 Service info: foodcal_status."
                    .into(),
            ),
        }
    }
}
