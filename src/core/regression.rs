use std::collections::{BTreeMap, BTreeSet};
use crate::models::{GroupKey, MedianRow, PropertyType, RegressionResult};

/// Minimum number of distinct years a group needs before a trend is fitted
pub const DEFAULT_MIN_HISTORY_YEARS: usize = 9;

/// Growth fits keyed by (locality, property type)
///
/// Every group of the input has a key. `None` means the group had too little
/// history to fit, which is different from a zero growth rate.
pub type GrowthFits = BTreeMap<GroupKey, Option<RegressionResult>>;

/// Ordinary least squares fit of `y = slope * x + intercept`
///
/// Returns `None` when the inputs are empty, differ in length, or `x` has no
/// spread.
pub fn ols(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, y_mean - slope * x_mean))
}

/// Fit `ln(price) = slope * year + intercept` over one group's rows
///
/// Groups with fewer than `min_years` distinct years are skipped.
pub fn log_regress(rows: &[&MedianRow], min_years: usize) -> Option<RegressionResult> {
    let distinct_years: BTreeSet<i32> = rows.iter().map(|r| r.year).collect();
    if distinct_years.len() < min_years {
        return None;
    }

    let years: Vec<f64> = rows.iter().map(|r| r.year as f64).collect();
    let log_prices: Vec<f64> = rows.iter().map(|r| r.price.ln()).collect();

    let (slope, intercept) = ols(&years, &log_prices)?;

    Some(RegressionResult::from_fit(slope, intercept))
}

/// Fit a growth trend for every (locality, property type) group
pub fn fit_growth(rows: &[MedianRow], min_years: usize) -> GrowthFits {
    let mut groups: BTreeMap<(&str, PropertyType), Vec<&MedianRow>> = BTreeMap::new();

    for row in rows {
        groups
            .entry((row.locality.as_str(), row.property_type))
            .or_default()
            .push(row);
    }

    groups
        .into_iter()
        .map(|((locality, property_type), group)| {
            let fit = log_regress(&group, min_years);
            (GroupKey::new(locality, property_type), fit)
        })
        .collect()
}
