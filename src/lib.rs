//! FoodCal Library
//!
//! Nutrition estimation from food descriptions and dish names.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
