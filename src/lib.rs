//! Suburb Trends - locality market-trend and growth-rate analytics
//!
//! This library turns per-sale property records into per-locality median
//! price series, log-linear growth rates and distance-aware suburb summaries
//! for the suburb price dashboard.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MarketAnalyzer, AnalysisSettings, SaleFilter, PriceSet, distance::distance_km};
pub use models::{SaleRecord, PropertyType, MedianRow, RegressionResult, SuburbCoord, SuburbSummary};
pub use services::{Dataset, LoaderError, SchemaError};
