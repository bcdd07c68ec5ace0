use std::collections::{BTreeMap, BTreeSet};
use crate::core::filters::{matches_filter, SaleFilter};
use crate::models::{LocalityPrice, MedianRow, PropertyType, SaleRecord};

/// Median of a slice of prices
///
/// Even-sized inputs take the mean of the two middle values. Returns `None`
/// for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Annualized change from a previous (year, price) point
///
/// The fractional change is divided by the elapsed years, so a gap of
/// missing years spreads the change evenly over the gap.
#[inline]
pub fn annualized_rate(prev_year: i32, prev_price: f64, year: i32, price: f64) -> f64 {
    let price_diff = price - prev_price;
    let year_diff = (year - prev_year) as f64;

    price_diff / prev_price / year_diff
}

/// Build the median/rate table from raw sales
///
/// Records are filtered first, then partitioned by (locality, property type,
/// year). Rows come out grouped by (locality, property type) with years
/// ascending; each group's first row has no rate. Filters that remove every
/// record give an empty table.
pub fn aggregate_medians(records: &[SaleRecord], filter: &SaleFilter) -> Vec<MedianRow> {
    let mut partitions: BTreeMap<(&str, PropertyType, i32), Vec<f64>> = BTreeMap::new();

    for record in records.iter().filter(|r| matches_filter(r, filter)) {
        partitions
            .entry((record.locality.as_str(), record.property_type, record.year))
            .or_default()
            .push(record.price);
    }

    let mut rows: Vec<MedianRow> = Vec::with_capacity(partitions.len());

    for ((locality, property_type, year), prices) in partitions {
        let Some(price) = median(&prices) else {
            continue;
        };

        let rate = match rows.last() {
            Some(prev) if prev.locality == locality && prev.property_type == property_type => {
                Some(annualized_rate(prev.year, prev.price, year, price))
            }
            _ => None,
        };

        rows.push(MedianRow {
            locality: locality.to_string(),
            property_type,
            year,
            price,
            rate,
        });
    }

    rows
}

/// Median price per locality over sales priced in `(0, price_ceiling]`
///
/// Property types and years are pooled. Used to colour the locality map.
pub fn median_price_by_locality(records: &[SaleRecord], price_ceiling: f64) -> Vec<LocalityPrice> {
    let mut by_locality: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|r| r.price > 0.0 && r.price <= price_ceiling)
    {
        by_locality
            .entry(record.locality.as_str())
            .or_default()
            .push(record.price);
    }

    by_locality
        .into_iter()
        .filter_map(|(locality, prices)| {
            median(&prices).map(|price| LocalityPrice {
                locality: locality.to_string(),
                price,
            })
        })
        .collect()
}

/// Distinct localities present in the sales, sorted
pub fn localities(records: &[SaleRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.locality.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
