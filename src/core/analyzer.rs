use crate::models::{LocalityPrice, MedianRow, SaleRecord, SuburbCoord, SuburbSummary};
use crate::core::{
    aggregate::{aggregate_medians, median_price_by_locality},
    boundary::{trim_boundaries, FeatureCollection, DEFAULT_ID_PROPERTY},
    distance::{is_within_distance, localities_within},
    filters::SaleFilter,
    regression::{fit_growth, GrowthFits, DEFAULT_MIN_HISTORY_YEARS},
    summary::{join_growth, ReferencePoint},
};

/// Default ceiling for the locality price map
pub const DEFAULT_PRICE_CEILING: f64 = 1_500_000.0;

/// Tunables of the analytics pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub reference: ReferencePoint,
    pub min_history_years: usize,
    pub price_ceiling: f64,
    pub boundary_id_property: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            reference: ReferencePoint::default(),
            min_history_years: DEFAULT_MIN_HISTORY_YEARS,
            price_ceiling: DEFAULT_PRICE_CEILING,
            boundary_id_property: DEFAULT_ID_PROPERTY.to_string(),
        }
    }
}

/// Suburb summary together with the fits it was built from
#[derive(Debug)]
pub struct SummaryResult {
    pub suburbs: Vec<SuburbSummary>,
    pub fits: GrowthFits,
}

/// Market analytics orchestrator
///
/// Holds only settings; every call takes the raw tables by reference and
/// recomputes from scratch.
///
/// # Pipeline
/// 1. Filter sales and take per-year medians with annualized rates
/// 2. Fit a log-linear trend per (locality, property type)
/// 3. Join distance and growth rates onto suburb coordinates
/// 4. Trim boundaries to the localities in view
#[derive(Debug, Clone, Default)]
pub struct MarketAnalyzer {
    settings: AnalysisSettings,
}

impl MarketAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Median/rate table for the filtered sales
    pub fn medians(&self, sales: &[SaleRecord], filter: &SaleFilter) -> Vec<MedianRow> {
        let rows = aggregate_medians(sales, filter);

        tracing::debug!(
            "Aggregated {} sales into {} median rows (filtered: {})",
            sales.len(),
            rows.len(),
            !filter.is_unfiltered()
        );

        rows
    }

    /// Growth fits over the full, unfiltered history
    pub fn growth(&self, sales: &[SaleRecord]) -> GrowthFits {
        let rows = aggregate_medians(sales, &SaleFilter::new());
        let fits = fit_growth(&rows, self.settings.min_history_years);

        tracing::debug!(
            "Fitted {} of {} groups (min {} years)",
            fits.values().filter(|fit| fit.is_some()).count(),
            fits.len(),
            self.settings.min_history_years
        );

        fits
    }

    /// One summary row per suburb coordinate
    pub fn summary(&self, sales: &[SaleRecord], coords: &[SuburbCoord]) -> SummaryResult {
        let fits = self.growth(sales);
        let suburbs = join_growth(coords, &fits, self.settings.reference);

        SummaryResult { suburbs, fits }
    }

    /// Summary rows whose distance from the reference lies in `[min_km, max_km]`
    pub fn summary_within(
        &self,
        sales: &[SaleRecord],
        coords: &[SuburbCoord],
        min_km: f64,
        max_km: f64,
    ) -> Vec<SuburbSummary> {
        self.summary(sales, coords)
            .suburbs
            .into_iter()
            .filter(|row| is_within_distance(row.dist, min_km, max_km))
            .collect()
    }

    /// Boundaries of the suburbs in a distance range
    pub fn boundaries_within(
        &self,
        boundaries: &FeatureCollection,
        coords: &[SuburbCoord],
        min_km: f64,
        max_km: f64,
    ) -> FeatureCollection {
        let suburbs = join_growth(coords, &GrowthFits::new(), self.settings.reference);
        let selected = localities_within(&suburbs, min_km, max_km);

        self.trim(boundaries, &selected)
    }

    /// Boundaries of an explicit locality selection
    pub fn trim<S: AsRef<str>>(&self, boundaries: &FeatureCollection, localities: &[S]) -> FeatureCollection {
        trim_boundaries(boundaries, localities, &self.settings.boundary_id_property)
    }

    /// Median price per locality under the configured ceiling
    pub fn price_map(&self, sales: &[SaleRecord]) -> Vec<LocalityPrice> {
        median_price_by_locality(sales, self.settings.price_ceiling)
    }
}
