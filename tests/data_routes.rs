use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt; // for `oneshot`

use minerals_portal::test_helpers::{ALICE_PASSWORD, seed_data_dir, test_router};

async fn logged_in_app() -> (Router, String) {
    let app = test_router(&seed_data_dir());
    let payload = json!({ "username": "alice", "password": ALICE_PASSWORD });
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let token = body["access_token"].as_str().unwrap().to_string();
    (app, token)
}

async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, serde_json::Value) {
    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = res.status();
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn countries_list_includes_derived_contribution() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/countries", &token).await;

    assert_eq!(status, StatusCode::OK);
    let countries = body.as_array().unwrap();
    assert_eq!(countries.len(), 3);

    let first = &countries[0];
    assert_eq!(first["country_id"], 1);
    assert_eq!(first["country_name"], "South Africa");
    assert_eq!(first["gdp_billion_usd"], 405.0);
    let pct = first["mining_contribution_pct"].as_f64().unwrap();
    assert!((pct - 6.0).abs() < 1e-9, "got {pct}");
}

#[tokio::test]
async fn country_detail_round_trips_stored_fields() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/countries/2", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"]["country_name"], "DR Congo");
    assert_eq!(body["country"]["key_projects"], "Kamoa-Kakula copper");
    // FK-filtered collections hold only this country's rows
    assert_eq!(body["production_stats"].as_array().unwrap().len(), 1);
    assert_eq!(body["sites"].as_array().unwrap().len(), 1);
    assert_eq!(body["site_markers"][0]["site_name"], "Kamoa");
}

#[tokio::test]
async fn unknown_country_is_not_found() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/countries/999", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Country not found");
}

#[tokio::test]
async fn unknown_mineral_is_not_found() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/minerals/999", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Mineral not found");
}

#[tokio::test]
async fn mineral_detail_shares_group_in_first_seen_order() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/minerals/1", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mineral"]["mineral_name"], "Platinum");

    let shares = body["production_share"].as_array().unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0]["country_name"], "South Africa");
    assert_eq!(shares[0]["production_tonnes"], 130);
    assert_eq!(shares[1]["country_name"], "DR Congo");
    assert_eq!(shares[1]["production_tonnes"], 50);
}

#[tokio::test]
async fn production_reports_average_price_per_tonne() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/production", &token).await;

    assert_eq!(status, StatusCode::OK);
    let stats = body.as_array().unwrap();
    assert_eq!(stats.len(), 4);

    // stat 1: 3.1 billion USD over 100 tonnes
    let avg = stats[0]["avg_price_per_tonne"].as_f64().unwrap();
    assert!((avg - 31_000_000.0).abs() < 1e-6, "got {avg}");
}

#[tokio::test]
async fn dashboard_counts_every_table() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/dashboard", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countries_count"], 3);
    assert_eq!(body["minerals_count"], 3);
    assert_eq!(body["sites_count"], 4);
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn site_markers_degrade_unknown_references() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/sites", &token).await;

    assert_eq!(status, StatusCode::OK);
    let markers = body.as_array().unwrap();
    assert_eq!(markers.len(), 4);
    assert_eq!(markers[0]["country_name"], "South Africa");
    assert_eq!(markers[0]["mineral_name"], "Platinum");
    assert_eq!(markers[3]["site_name"], "Orphan Pit");
    assert_eq!(markers[3]["country_name"], "Unknown");
    assert_eq!(markers[3]["mineral_name"], "Unknown");
}

#[tokio::test]
async fn analytics_bundles_all_series() {
    let (app, token) = logged_in_app().await;
    let (status, body) = get(&app, "/analytics", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mineral_prices"].as_array().unwrap().len(), 3);
    assert_eq!(body["country_gdp"].as_array().unwrap().len(), 3);
    assert_eq!(body["production_trend"].as_array().unwrap().len(), 4);
    assert_eq!(body["export_values"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn missing_store_degrades_instead_of_crashing() {
    let empty_app = test_router(std::path::Path::new("/nonexistent-data-dir"));

    // login cannot work without users.csv; the public route still answers
    let res = empty_app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let payload = json!({ "username": "alice", "password": ALICE_PASSWORD });
    let res = empty_app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    // absent store degrades to "no such user", not a crash
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
