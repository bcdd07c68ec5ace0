// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{SaleRecord, PropertyType, MedianRow, GroupKey, RegressionResult, SuburbCoord, SuburbSummary, LocalityPrice};
pub use requests::{MedianRequest, SummaryRequest, BoundaryRequest};
pub use responses::{MediansResponse, GrowthEntry, GrowthResponse, SuburbSummaryView, SummaryResponse, LocalityPriceView, PriceMapResponse, HealthResponse, ErrorResponse};
