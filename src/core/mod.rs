// Core pipeline exports
pub mod aggregate;
pub mod analyzer;
pub mod boundary;
pub mod distance;
pub mod filters;
pub mod format;
pub mod regression;
pub mod summary;

pub use aggregate::{aggregate_medians, median_price_by_locality, localities, median};
pub use analyzer::{MarketAnalyzer, AnalysisSettings, SummaryResult};
pub use boundary::{trim_boundaries, FeatureCollection, Feature};
pub use distance::{distance_km, is_within_distance, localities_within};
pub use filters::{matches_filter, SaleFilter, PriceSet};
pub use format::{format_million, format_percent};
pub use regression::{fit_growth, log_regress, GrowthFits};
pub use summary::{build_suburb_summary, join_growth, ReferencePoint};
