// Integration tests for Suburb Trends

use actix_web::{test as atest, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use suburb_trends::core::{FeatureCollection, MarketAnalyzer, SaleFilter};
use suburb_trends::models::{GrowthResponse, MediansResponse, PriceMapResponse, PropertyType, SummaryResponse};
use suburb_trends::routes::{configure_routes, AppState};
use suburb_trends::services::{read_sales, read_suburb_coords, Dataset};

/// Sales CSV with a long house history in PADDINGTON, a short unit history
/// in SURRY HILLS and one locality (PENRITH) far from the CBD.
fn sales_csv() -> String {
    let mut csv = String::from("locality,property_type,year,price,bedrooms,land_size\n");
    for i in 0..10 {
        let year = 2010 + i;
        let price = 1_000_000.0 * 1.05f64.powi(i);
        csv.push_str(&format!("PADDINGTON,house,{},{},3,200\n", year, price));
        csv.push_str(&format!("PENRITH,house,{},{},4,550\n", year, price * 0.5));
    }
    for (year, price) in [(2018, 700_000), (2019, 720_000), (2021, 760_000)] {
        csv.push_str(&format!("SURRY HILLS,unit,{},{},2,0\n", year, price));
    }
    csv.push_str("SURRY HILLS,unit,2019,1000000,1,0\n");
    csv.push_str("SURRY HILLS,unit,2019,2000000,3,0\n");
    csv
}

fn coords_json() -> &'static str {
    r#"[
        {"locality": "PADDINGTON", "lat": -33.884, "lon": 151.231},
        {"locality": "SURRY HILLS", "lat": -33.884, "lon": 151.212},
        {"locality": "PENRITH", "lat": -33.751, "lon": 150.694},
        {"locality": "DARLINGHURST", "lat": -33.879, "lon": 151.219}
    ]"#
}

fn boundaries() -> FeatureCollection {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "name": "nsw_localities",
        "features": [
            {"type": "Feature", "properties": {"nsw_loca_2": "PENRITH"}, "geometry": null},
            {"type": "Feature", "properties": {"nsw_loca_2": "PADDINGTON"}, "geometry": null},
            {"type": "Feature", "properties": {"nsw_loca_2": "BONDI"}, "geometry": null},
            {"type": "Feature", "properties": {"nsw_loca_2": "SURRY HILLS"}, "geometry": null}
        ]
    }))
    .unwrap()
}

fn create_dataset() -> Dataset {
    let sales = read_sales(sales_csv().as_bytes()).unwrap();
    let suburbs = read_suburb_coords(coords_json().as_bytes()).unwrap();
    Dataset::from_parts(sales, suburbs, boundaries(), "nsw_loca_2")
}

fn create_state() -> AppState {
    AppState {
        dataset: Arc::new(create_dataset()),
        analyzer: MarketAnalyzer::default(),
    }
}

#[test]
fn test_integration_end_to_end_pipeline() {
    let dataset = create_dataset();
    let analyzer = MarketAnalyzer::default();

    // Boundaries without sales are dropped at load
    assert_eq!(dataset.boundaries.len(), 3);

    let rows = analyzer.medians(&dataset.sales, &SaleFilter::new().with_locality("SURRY HILLS"));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].year, 2019);
    assert_eq!(rows[1].price, 1_000_000.0);

    let result = analyzer.summary(&dataset.sales, &dataset.suburbs);
    assert_eq!(result.suburbs.len(), 4);

    let paddington = &result.suburbs[0];
    assert!((paddington.annual_rate(PropertyType::House).unwrap() - 0.05).abs() < 1e-9);
    assert_eq!(paddington.annual_rate(PropertyType::Unit), None);

    // Short history and no sales both stay in the table with null rates
    assert_eq!(result.suburbs[1].annual_rate_unit, None);
    assert_eq!(result.suburbs[3].annual_rate_house, None);

    let penrith = &result.suburbs[2];
    assert!(penrith.dist > 40.0, "Penrith should be far from the CBD, got {}", penrith.dist);
}

#[test]
fn test_distance_selection_drives_trimming() {
    let dataset = create_dataset();
    let analyzer = MarketAnalyzer::default();

    let near = analyzer.summary_within(&dataset.sales, &dataset.suburbs, 0.0, 10.0);
    let names: Vec<_> = near.iter().map(|s| s.locality.as_str()).collect();
    assert_eq!(names, vec!["PADDINGTON", "SURRY HILLS", "DARLINGHURST"]);

    let trimmed = analyzer.boundaries_within(&dataset.boundaries, &dataset.suburbs, 0.0, 10.0);
    let ids: Vec<_> = trimmed
        .features
        .iter()
        .filter_map(|f| f.locality_id("nsw_loca_2"))
        .collect();
    assert_eq!(ids, vec!["PADDINGTON", "SURRY HILLS"]);
    assert_eq!(trimmed.metadata["name"], "nsw_localities");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = atest::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["suburbs"], 4);
}

#[actix_web::test]
async fn test_medians_endpoint_with_filters() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/medians")
        .set_json(json!({
            "locality": "SURRY HILLS",
            "prices": [1000000.0, 2000000.0],
            "bedrooms": [1, 3]
        }))
        .to_request();
    let body: MediansResponse = atest::call_and_read_body_json(&app, req).await;

    assert_eq!(body.rows.len(), 1);
    assert_eq!(body.rows[0].price, 1_500_000.0);
    assert_eq!(body.rows[0].rate, None);
}

#[actix_web::test]
async fn test_medians_endpoint_empty_result() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/medians")
        .set_json(json!({"prices": [3000000.0]}))
        .to_request();
    let resp = atest::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: MediansResponse = atest::read_body_json(resp).await;
    assert!(body.rows.is_empty());
}

#[actix_web::test]
async fn test_medians_endpoint_rejects_empty_locality() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/medians")
        .set_json(json!({"locality": ""}))
        .to_request();
    let resp = atest::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_growth_endpoint_distinguishes_null() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::get().uri("/api/v1/market/growth").to_request();
    let body: GrowthResponse = atest::call_and_read_body_json(&app, req).await;

    assert_eq!(body.groups.len(), 3);
    assert_eq!(body.fitted, 2);

    let surry = body
        .groups
        .iter()
        .find(|g| g.locality == "SURRY HILLS")
        .unwrap();
    assert_eq!(surry.annual_rate, None);
    assert_eq!(surry.slope, None);
}

#[actix_web::test]
async fn test_suburbs_endpoint() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/suburbs")
        .set_json(json!({}))
        .to_request();
    let body: SummaryResponse = atest::call_and_read_body_json(&app, req).await;

    assert_eq!(body.suburbs.len(), 4);
    assert_eq!(body.total_suburbs, 4);
    assert_eq!(body.suburbs[0].annual_rate_house_label.as_deref(), Some("5.0%"));
    assert_eq!(body.suburbs[3].annual_rate_house_label, None);

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/suburbs")
        .set_json(json!({"min_distance_km": 20.0}))
        .to_request();
    let body: SummaryResponse = atest::call_and_read_body_json(&app, req).await;

    assert_eq!(body.suburbs.len(), 1);
    assert_eq!(body.suburbs[0].summary.locality, "PENRITH");
}

#[actix_web::test]
async fn test_suburbs_endpoint_inverted_range() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/suburbs")
        .set_json(json!({"min_distance_km": 30.0, "max_distance_km": 10.0}))
        .to_request();
    let resp = atest::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_boundaries_endpoint() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/boundaries")
        .set_json(json!({"localities": ["SURRY HILLS", "PENRITH"]}))
        .to_request();
    let body: FeatureCollection = atest::call_and_read_body_json(&app, req).await;

    let ids: Vec<_> = body
        .features
        .iter()
        .filter_map(|f| f.locality_id("nsw_loca_2"))
        .collect();
    assert_eq!(ids, vec!["PENRITH", "SURRY HILLS"]);

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/boundaries")
        .set_json(json!({"localities": []}))
        .to_request();
    let body: FeatureCollection = atest::call_and_read_body_json(&app, req).await;

    assert!(body.features.is_empty());
    assert_eq!(body.metadata["type"], "FeatureCollection");
}

#[actix_web::test]
async fn test_price_map_endpoint() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::get().uri("/api/v1/market/prices").to_request();
    let body: PriceMapResponse = atest::call_and_read_body_json(&app, req).await;

    let localities: Vec<_> = body
        .localities
        .iter()
        .map(|l| l.price.locality.as_str())
        .collect();
    assert_eq!(localities, vec!["PADDINGTON", "PENRITH", "SURRY HILLS"]);
    assert_eq!(body.price_ceiling, 1_500_000.0);
    assert!(body.localities.iter().all(|l| l.price.price <= 1_500_000.0));
    assert!(body.localities.iter().all(|l| l.label.ends_with('M')));
}

#[actix_web::test]
async fn test_boundaries_endpoint_distance_range() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/boundaries")
        .set_json(json!({"max_distance_km": 10.0}))
        .to_request();
    let body: FeatureCollection = atest::call_and_read_body_json(&app, req).await;

    let ids: Vec<_> = body
        .features
        .iter()
        .filter_map(|f| f.locality_id("nsw_loca_2"))
        .collect();
    assert_eq!(ids, vec!["PADDINGTON", "SURRY HILLS"]);
    assert_eq!(body.metadata["name"], "nsw_localities");
}

#[actix_web::test]
async fn test_boundaries_endpoint_inverted_range() {
    let app = atest::init_service(
        App::new()
            .app_data(web::Data::new(create_state()))
            .configure(configure_routes),
    )
    .await;

    let req = atest::TestRequest::post()
        .uri("/api/v1/market/boundaries")
        .set_json(json!({"min_distance_km": 30.0, "max_distance_km": 10.0}))
        .to_request();
    let resp = atest::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
