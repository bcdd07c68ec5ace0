use std::collections::HashSet;
use crate::models::SaleRecord;

/// One million, the step of the price slider
pub const PRICE_STEP: f64 = 1_000_000.0;

/// Finite set of exact prices
///
/// Membership is exact equality, not an interval: a sale priced 1.2M is not
/// in `PriceSet::millions(1, 2)`. The dashboard's price slider feeds this set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSet {
    prices: Vec<f64>,
}

impl PriceSet {
    pub fn new(prices: impl IntoIterator<Item = f64>) -> Self {
        Self {
            prices: prices.into_iter().collect(),
        }
    }

    /// Every whole multiple of a million from `from` to `to` inclusive
    pub fn millions(from: u32, to: u32) -> Self {
        Self::new((from..=to).map(|m| m as f64 * PRICE_STEP))
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        self.prices.iter().any(|p| *p == price)
    }
}

/// Optional filters applied to sale records before aggregation
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    pub locality: Option<String>,
    pub prices: Option<PriceSet>,
    pub bedrooms: Option<HashSet<u32>>,
}

impl SaleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_prices(mut self, prices: PriceSet) -> Self {
        self.prices = Some(prices);
        self
    }

    pub fn with_bedrooms(mut self, bedrooms: impl IntoIterator<Item = u32>) -> Self {
        self.bedrooms = Some(bedrooms.into_iter().collect());
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.locality.is_none() && self.prices.is_none() && self.bedrooms.is_none()
    }
}

/// Check if a sale passes every provided filter
#[inline]
pub fn matches_filter(record: &SaleRecord, filter: &SaleFilter) -> bool {
    if let Some(locality) = &filter.locality {
        if record.locality != *locality {
            return false;
        }
    }

    if let Some(prices) = &filter.prices {
        if !prices.contains(record.price) {
            return false;
        }
    }

    if let Some(bedrooms) = &filter.bedrooms {
        if !bedrooms.contains(&record.bedrooms) {
            return false;
        }
    }

    true
}
