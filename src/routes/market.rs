use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    MedianRequest, SummaryRequest, BoundaryRequest, MediansResponse, GrowthEntry, GrowthResponse,
    SuburbSummaryView, SummaryResponse, LocalityPriceView, PriceMapResponse, HealthResponse, ErrorResponse,
};
use crate::core::{format_million, format_percent, MarketAnalyzer, PriceSet, SaleFilter};
use crate::services::Dataset;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub analyzer: MarketAnalyzer,
}

/// Configure all market routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/market/medians", web::post().to(medians))
        .route("/market/growth", web::get().to(growth))
        .route("/market/suburbs", web::post().to(suburbs))
        .route("/market/boundaries", web::post().to(boundaries))
        .route("/market/prices", web::get().to(price_map));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn check_range(req: &SummaryRequest) -> Result<(f64, f64), HttpResponse> {
    let (min_km, max_km) = req.bounds();
    if min_km > max_km {
        tracing::warn!("Rejected inverted distance range {} > {}", min_km, max_km);
        return Err(bad_request(
            "Invalid distance range",
            format!("min_distance_km ({}) exceeds max_distance_km ({})", min_km, max_km),
        ));
    }
    Ok((min_km, max_km))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.dataset.sales.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        sales: state.dataset.sales.len(),
        suburbs: state.dataset.suburbs.len(),
    })
}

/// Median/rate table endpoint
///
/// POST /api/v1/market/medians
///
/// Request body:
/// ```json
/// {
///   "locality": "NEWTOWN",
///   "prices": [1000000, 2000000],
///   "bedrooms": [2, 3]
/// }
/// ```
/// Every field is optional; prices and bedrooms are exact-value sets.
async fn medians(
    state: web::Data<AppState>,
    req: web::Json<MedianRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for medians request: field_errors={:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let mut filter = SaleFilter::new();
    filter.locality = req.locality;
    filter.prices = req.prices.map(PriceSet::new);
    filter.bedrooms = req.bedrooms.map(|b| b.into_iter().collect());

    let rows = state.analyzer.medians(&state.dataset.sales, &filter);

    tracing::info!(
        "Returning {} median rows (locality: {:?})",
        rows.len(),
        filter.locality
    );

    HttpResponse::Ok().json(MediansResponse {
        rows,
        total_records: state.dataset.sales.len(),
    })
}

/// Growth fits over the full history
///
/// GET /api/v1/market/growth
async fn growth(state: web::Data<AppState>) -> impl Responder {
    let fits = state.analyzer.growth(&state.dataset.sales);

    let groups: Vec<GrowthEntry> = fits
        .into_iter()
        .map(|(key, fit)| GrowthEntry {
            locality: key.locality,
            property_type: key.property_type,
            slope: fit.map(|f| f.slope),
            intercept: fit.map(|f| f.intercept),
            annual_rate: fit.map(|f| f.annual_rate),
        })
        .collect();
    let fitted = groups.iter().filter(|g| g.annual_rate.is_some()).count();

    tracing::info!("Returning {} growth groups ({} fitted)", groups.len(), fitted);

    HttpResponse::Ok().json(GrowthResponse { groups, fitted })
}

/// Suburb summary endpoint
///
/// POST /api/v1/market/suburbs
///
/// Request body:
/// ```json
/// {
///   "min_distance_km": 0,
///   "max_distance_km": 15
/// }
/// ```
async fn suburbs(
    state: web::Data<AppState>,
    req: web::Json<SummaryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let (min_km, max_km) = match check_range(&req) {
        Ok(range) => range,
        Err(response) => return response,
    };

    let dataset = &state.dataset;
    let rows = if req.has_distance_range() {
        state.analyzer.summary_within(&dataset.sales, &dataset.suburbs, min_km, max_km)
    } else {
        state.analyzer.summary(&dataset.sales, &dataset.suburbs).suburbs
    };

    let suburbs: Vec<SuburbSummaryView> = rows
        .into_iter()
        .map(|summary| SuburbSummaryView {
            annual_rate_house_label: summary.annual_rate_house.map(format_percent),
            annual_rate_unit_label: summary.annual_rate_unit.map(format_percent),
            summary,
        })
        .collect();

    tracing::info!(
        "Returning {} of {} suburbs",
        suburbs.len(),
        dataset.suburbs.len()
    );

    HttpResponse::Ok().json(SummaryResponse {
        total_suburbs: dataset.suburbs.len(),
        suburbs,
    })
}

/// Trimmed locality boundaries endpoint
///
/// POST /api/v1/market/boundaries
///
/// An explicit `localities` list wins; otherwise the distance range selects
/// the suburbs; with neither, every boundary of the dataset is returned.
async fn boundaries(
    state: web::Data<AppState>,
    req: web::Json<BoundaryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let dataset = &state.dataset;
    let range = req.distance_range();

    let collection = if let Some(localities) = &req.localities {
        state.analyzer.trim(&dataset.boundaries, localities)
    } else if range.has_distance_range() {
        let (min_km, max_km) = match check_range(&range) {
            Ok(range) => range,
            Err(response) => return response,
        };
        state
            .analyzer
            .boundaries_within(&dataset.boundaries, &dataset.suburbs, min_km, max_km)
    } else {
        dataset.boundaries.clone()
    };

    tracing::debug!(
        "Returning {} of {} boundary features",
        collection.len(),
        dataset.boundaries.len()
    );

    HttpResponse::Ok().json(collection)
}

/// Locality price map endpoint
///
/// GET /api/v1/market/prices
async fn price_map(state: web::Data<AppState>) -> impl Responder {
    let localities: Vec<LocalityPriceView> = state
        .analyzer
        .price_map(&state.dataset.sales)
        .into_iter()
        .map(|price| LocalityPriceView {
            label: format_million(price.price),
            price,
        })
        .collect();

    HttpResponse::Ok().json(PriceMapResponse {
        localities,
        price_ceiling: state.analyzer.settings().price_ceiling,
    })
}
