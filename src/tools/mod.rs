//! FoodCal Tools module
//!
//! MCP tool implementations for FoodCal.

pub mod analysis;
pub mod status;
