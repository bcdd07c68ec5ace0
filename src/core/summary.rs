use crate::core::{distance::distance_km, regression::{fit_growth, GrowthFits}};
use crate::models::{GroupKey, MedianRow, PropertyType, SuburbCoord, SuburbSummary};

/// Reference coordinate every suburb distance is measured from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lon: f64,
}

impl ReferencePoint {
    /// Sydney CBD
    pub const SYDNEY_CBD: ReferencePoint = ReferencePoint {
        lat: -33.869844,
        lon: 151.208285,
    };

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::SYDNEY_CBD
    }
}

/// Build one summary row per suburb coordinate
///
/// Growth is fitted over the full-history `median_rows` and pivoted into one
/// rate column per property type. The join is a left join on locality:
/// suburbs without a fit keep their coordinates and distance with null rates.
pub fn build_suburb_summary(
    coords: &[SuburbCoord],
    median_rows: &[MedianRow],
    reference: ReferencePoint,
    min_years: usize,
) -> Vec<SuburbSummary> {
    let fits = fit_growth(median_rows, min_years);
    join_growth(coords, &fits, reference)
}

/// Left-join already computed growth fits onto suburb coordinates
pub fn join_growth(
    coords: &[SuburbCoord],
    fits: &GrowthFits,
    reference: ReferencePoint,
) -> Vec<SuburbSummary> {
    coords
        .iter()
        .map(|coord| {
            let mut row = SuburbSummary {
                locality: coord.locality.clone(),
                lat: coord.lat,
                lon: coord.lon,
                dist: distance_km(coord.lat, coord.lon, reference.lat, reference.lon),
                annual_rate_house: None,
                annual_rate_unit: None,
            };

            for property_type in PropertyType::ALL {
                let key = GroupKey::new(coord.locality.as_str(), property_type);
                let rate = fits
                    .get(&key)
                    .copied()
                    .flatten()
                    .map(|fit| fit.annual_rate);
                row.set_annual_rate(property_type, rate);
            }

            row
        })
        .collect()
}
