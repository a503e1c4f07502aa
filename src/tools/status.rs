//! FoodCal Status Tool
//!
//! Provides runtime status information about the FoodCal service.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;

/// Usage instructions for AI assistants
pub const ANALYSIS_INSTRUCTIONS: &str = r#"
# FoodCal Analysis Instructions

FoodCal turns a food description or an identified food label into a
nutrition summary: calories (kcal), carbs, protein, fat, fiber and sugar (grams).

## Which tool to use

| Input | Tool |
|-------|------|
| Free text typed by the user ("grilled chicken with rice") | `estimate_nutrition` |
| A single identified dish label ("masala_dosa") | `lookup_nutrition` |
| Raw reply from the image classifier | `ingest_classifier_reply` |
| Portion advice for a food already analyzed | `serving_suggestions` |

## How estimates are built

1. Every known ingredient named in the text is added up
   ("chicken and rice" = chicken + rice).
2. If nothing is recognized, a meal-time estimate is used:
   breakfast, lunch, dinner, or a generic meal.
3. Portion words scale the whole total:
   - "extra large" / "jumbo" → ×2.0
   - "large" / "big" → ×1.5
   - "small" / "mini" → ×0.7
4. Every value is rounded to a whole number.

Estimates are approximate. Values vary with preparation and portion size.

## Dish lookup

`lookup_nutrition` only matches whole dish names (case-insensitive), spelled
with underscores: `butter_naan`, `pav_bhaji`. Anything else returns a default
record with `matched: false`.

## Classifier replies

Pass the classifier's raw text unchanged. If it cannot be used, the tool
reports "Failed to analyze image. Please try again." Do not retry
automatically.

Call `list_known_foods` to see every recognized keyword and dish name.
"#;

/// FoodCal status information
#[derive(Debug, Clone, Serialize)]
pub struct FoodCalStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub config: Config,
    pub estimates_served: u64,
    pub lookups_served: u64,
    pub classifier_replies_accepted: u64,
    pub classifier_replies_rejected: u64,
}

/// Tracks service uptime and request counts
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    config: Config,
    estimates_served: u64,
    lookups_served: u64,
    classifier_replies_accepted: u64,
    classifier_replies_rejected: u64,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            config,
            estimates_served: 0,
            lookups_served: 0,
            classifier_replies_accepted: 0,
            classifier_replies_rejected: 0,
        }
    }

    pub fn record_estimate(&mut self) {
        self.estimates_served += 1;
    }

    pub fn record_lookup(&mut self) {
        self.lookups_served += 1;
    }

    pub fn record_classifier_reply(&mut self, accepted: bool) {
        if accepted {
            self.classifier_replies_accepted += 1;
        } else {
            self.classifier_replies_rejected += 1;
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FoodCalStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FoodCalStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            config: self.config.clone(),
            estimates_served: self.estimates_served,
            lookups_served: self.lookups_served,
            classifier_replies_accepted: self.classifier_replies_accepted,
            classifier_replies_rejected: self.classifier_replies_rejected,
        }
    }
}
