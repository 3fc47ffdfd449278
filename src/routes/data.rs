use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware,
    routing::get,
};
use serde::Serialize;

use crate::{
    auth::{SessionClaims, jwt::session_auth},
    db::records::{CountryView, MineralView, ProductionStatsView, SiteView},
    error::AppError,
    services::{
        StatsFilter,
        viz_service::{ExportPoint, GdpBar, PriceBar, ShareSlice, SiteMarker, TrendPoint},
    },
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/me", get(me))
        .route("/dashboard", get(dashboard))
        .route("/countries", get(countries))
        .route("/countries/{id}", get(country_detail))
        .route("/minerals", get(minerals))
        .route("/minerals/{id}", get(mineral_detail))
        .route("/sites", get(sites))
        .route("/production", get(production))
        .route("/analytics", get(analytics))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_auth))
        .with_state(state)
}

async fn me(claims: SessionClaims) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "user_id": claims.user_id,
        "username": claims.username,
        "role_id": claims.role_id,
        "iat": claims.iat,
        "exp": claims.exp,
    }))
}

async fn dashboard(
    State(state): State<Arc<AppState>>,
    claims: SessionClaims,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "username": claims.username,
        "countries_count": state.data.all_countries().len(),
        "minerals_count": state.data.all_minerals().len(),
        "sites_count": state.data.all_sites().len(),
    }))
}

async fn countries(State(state): State<Arc<AppState>>) -> Json<Vec<CountryView>> {
    Json(state.data.all_countries().iter().map(Into::into).collect())
}

#[derive(Debug, Serialize)]
struct CountryDetail {
    country: CountryView,
    production_stats: Vec<ProductionStatsView>,
    sites: Vec<SiteView>,
    production_trend: Vec<TrendPoint>,
    export_values: Vec<ExportPoint>,
    site_markers: Vec<SiteMarker>,
}

async fn country_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<CountryDetail>, AppError> {
    let country = state
        .data
        .country(id)
        .ok_or_else(|| AppError::not_found("Country not found"))?;

    Ok(Json(CountryDetail {
        country: CountryView::from(&country),
        production_stats: state
            .data
            .production_by_country(id)
            .iter()
            .map(Into::into)
            .collect(),
        sites: state.data.sites_by_country(id).iter().map(Into::into).collect(),
        production_trend: state.viz.production_trend(StatsFilter::Country(id)),
        export_values: state.viz.export_values(StatsFilter::Country(id)),
        site_markers: state.viz.country_site_markers(id),
    }))
}

async fn minerals(State(state): State<Arc<AppState>>) -> Json<Vec<MineralView>> {
    Json(state.data.all_minerals().iter().map(Into::into).collect())
}

#[derive(Debug, Serialize)]
struct MineralDetail {
    mineral: MineralView,
    production_stats: Vec<ProductionStatsView>,
    sites: Vec<SiteView>,
    production_trend: Vec<TrendPoint>,
    export_values: Vec<ExportPoint>,
    production_share: Vec<ShareSlice>,
}

async fn mineral_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<MineralDetail>, AppError> {
    // An unknown id is an explicit miss here, surfaced as 404.
    let mineral = state
        .data
        .mineral(id)
        .ok_or_else(|| AppError::not_found("Mineral not found"))?;

    Ok(Json(MineralDetail {
        mineral: MineralView::from(&mineral),
        production_stats: state
            .data
            .production_by_mineral(id)
            .iter()
            .map(Into::into)
            .collect(),
        sites: state.data.sites_by_mineral(id).iter().map(Into::into).collect(),
        production_trend: state.viz.production_trend(StatsFilter::Mineral(id)),
        export_values: state.viz.export_values(StatsFilter::Mineral(id)),
        production_share: state.viz.production_share(id),
    }))
}

async fn sites(State(state): State<Arc<AppState>>) -> Json<Vec<SiteMarker>> {
    Json(state.viz.site_markers())
}

async fn production(State(state): State<Arc<AppState>>) -> Json<Vec<ProductionStatsView>> {
    Json(
        state
            .data
            .all_production_stats()
            .iter()
            .map(Into::into)
            .collect(),
    )
}

#[derive(Debug, Serialize)]
struct Analytics {
    mineral_prices: Vec<PriceBar>,
    country_gdp: Vec<GdpBar>,
    production_trend: Vec<TrendPoint>,
    export_values: Vec<ExportPoint>,
}

async fn analytics(State(state): State<Arc<AppState>>) -> Json<Analytics> {
    Json(Analytics {
        mineral_prices: state.viz.mineral_prices(),
        country_gdp: state.viz.country_gdp(),
        production_trend: state.viz.production_trend(StatsFilter::All),
        export_values: state.viz.export_values(StatsFilter::All),
    })
}
