use serde::{Deserialize, Serialize};
use std::fmt;

/// Property type of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[serde(alias = "House")]
    House,
    #[serde(alias = "Unit")]
    Unit,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::House, PropertyType::Unit];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Unit => "unit",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property sale, as ingested from the sales table.
///
/// Columns other than the ones below are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub locality: String,
    pub property_type: PropertyType,
    pub year: i32,
    pub price: f64,
    pub bedrooms: u32,
}

/// Median price of one (locality, property type, year) partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedianRow {
    pub locality: String,
    pub property_type: PropertyType,
    pub year: i32,
    pub price: f64,
    /// Annualized change against the previous row of the same group.
    /// `None` for the first row of every group.
    pub rate: Option<f64>,
}

/// Grouping key shared by the aggregator and the regression engine
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub locality: String,
    pub property_type: PropertyType,
}

impl GroupKey {
    pub fn new(locality: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            locality: locality.into(),
            property_type,
        }
    }
}

/// Log-linear fit of price against year for one group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub annual_rate: f64,
}

impl RegressionResult {
    pub fn from_fit(slope: f64, intercept: f64) -> Self {
        Self {
            slope,
            intercept,
            annual_rate: slope.exp() - 1.0,
        }
    }
}

/// Centroid of a suburb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbCoord {
    pub locality: String,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,
}

/// Per-suburb row joining location, distance from centre and growth rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuburbSummary {
    pub locality: String,
    pub lat: f64,
    pub lon: f64,
    pub dist: f64,
    pub annual_rate_house: Option<f64>,
    pub annual_rate_unit: Option<f64>,
}

impl SuburbSummary {
    pub fn annual_rate(&self, property_type: PropertyType) -> Option<f64> {
        match property_type {
            PropertyType::House => self.annual_rate_house,
            PropertyType::Unit => self.annual_rate_unit,
        }
    }

    pub fn set_annual_rate(&mut self, property_type: PropertyType, rate: Option<f64>) {
        match property_type {
            PropertyType::House => self.annual_rate_house = rate,
            PropertyType::Unit => self.annual_rate_unit = rate,
        }
    }
}

/// Median price of a locality, all property types and years combined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalityPrice {
    pub locality: String,
    pub price: f64,
}
