use geo::{EuclideanDistance, Point};
use crate::models::SuburbSummary;

/// Nautical miles in one degree of arc
const NM_PER_DEGREE: f64 = 60.0;

/// Kilometres in one nautical mile
const KM_PER_NM: f64 = 1.852;

/// Estimate the distance between two points in kilometers
///
/// Planar approximation: the Euclidean distance in degrees, converted through
/// nautical miles. Only meaningful over metropolitan distances; suburb
/// filtering depends on this exact metric, so it is not a great-circle
/// distance.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers (NaN if any input is NaN)
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = Point::new(lon1, lat1);
    let b = Point::new(lon2, lat2);

    a.euclidean_distance(&b) * NM_PER_DEGREE * KM_PER_NM
}

/// Check if a distance lies in an inclusive range
#[inline]
pub fn is_within_distance(dist: f64, min_km: f64, max_km: f64) -> bool {
    dist >= min_km && dist <= max_km
}

/// Localities whose distance from the centre lies in `[min_km, max_km]`
///
/// Keeps summary order. This is the selection handed to the boundary trimmer
/// when a distance filter narrows the visible suburbs.
pub fn localities_within(summary: &[SuburbSummary], min_km: f64, max_km: f64) -> Vec<String> {
    summary
        .iter()
        .filter(|row| is_within_distance(row.dist, min_km, max_km))
        .map(|row| row.locality.clone())
        .collect()
}
