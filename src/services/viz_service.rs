use serde::Serialize;

use super::DataService;
use crate::db::{ProductionStats, Site};

/// Scope for the trend/export series: everything, one mineral, or one
/// country.
#[derive(Debug, Clone, Copy)]
pub enum StatsFilter {
    All,
    Mineral(u32),
    Country(u32),
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub year: u32,
    pub production_tonnes: u64,
}

#[derive(Debug, Serialize)]
pub struct ExportPoint {
    pub year: u32,
    pub export_value_billion_usd: f64,
}

#[derive(Debug, Serialize)]
pub struct PriceBar {
    pub mineral_name: String,
    pub market_price_usd_per_tonne: f64,
}

#[derive(Debug, Serialize)]
pub struct GdpBar {
    pub country_name: String,
    pub gdp_billion_usd: f64,
    pub mining_revenue_billion_usd: f64,
    pub mining_contribution_pct: f64,
}

#[derive(Debug, Serialize)]
pub struct ShareSlice {
    pub country_name: String,
    pub production_tonnes: u64,
}

#[derive(Debug, Serialize)]
pub struct SiteMarker {
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_name: String,
    pub mineral_name: String,
    pub production_tonnes: u64,
}

/// Prepares chart- and map-ready series from the query layer. Rendering
/// belongs to the consumer; everything here is plain serializable data.
#[derive(Debug, Clone)]
pub struct VizService {
    data: DataService,
}

impl VizService {
    pub fn new(data: DataService) -> Self {
        Self { data }
    }

    fn stats_for(&self, filter: StatsFilter) -> Vec<ProductionStats> {
        match filter {
            StatsFilter::All => self.data.all_production_stats(),
            StatsFilter::Mineral(id) => self.data.production_by_mineral(id),
            StatsFilter::Country(id) => self.data.production_by_country(id),
        }
    }

    pub fn production_trend(&self, filter: StatsFilter) -> Vec<TrendPoint> {
        self.stats_for(filter)
            .iter()
            .map(|stat| TrendPoint {
                year: stat.year,
                production_tonnes: stat.production_tonnes,
            })
            .collect()
    }

    pub fn export_values(&self, filter: StatsFilter) -> Vec<ExportPoint> {
        self.stats_for(filter)
            .iter()
            .map(|stat| ExportPoint {
                year: stat.year,
                export_value_billion_usd: stat.export_value_billion_usd,
            })
            .collect()
    }

    pub fn mineral_prices(&self) -> Vec<PriceBar> {
        self.data
            .all_minerals()
            .iter()
            .map(|mineral| PriceBar {
                mineral_name: mineral.mineral_name.clone(),
                market_price_usd_per_tonne: mineral.market_price_usd_per_tonne,
            })
            .collect()
    }

    pub fn country_gdp(&self) -> Vec<GdpBar> {
        self.data
            .all_countries()
            .iter()
            .map(|country| GdpBar {
                country_name: country.country_name.clone(),
                gdp_billion_usd: country.gdp_billion_usd,
                mining_revenue_billion_usd: country.mining_revenue_billion_usd,
                mining_contribution_pct: country.mining_contribution_pct(),
            })
            .collect()
    }

    /// Share-of-total tonnage per producing country for one mineral, in
    /// first-seen order. Groups whose country id resolves to no country
    /// row are dropped.
    pub fn production_share(&self, mineral_id: u32) -> Vec<ShareSlice> {
        let stats = self.data.production_by_mineral(mineral_id);
        let countries = self.data.all_countries();

        DataService::production_by_country_totals(&stats)
            .into_iter()
            .filter_map(|(country_id, production_tonnes)| {
                countries
                    .iter()
                    .find(|c| c.country_id == country_id)
                    .map(|country| ShareSlice {
                        country_name: country.country_name.clone(),
                        production_tonnes,
                    })
            })
            .collect()
    }

    pub fn site_markers(&self) -> Vec<SiteMarker> {
        self.markers(self.data.all_sites())
    }

    pub fn country_site_markers(&self, country_id: u32) -> Vec<SiteMarker> {
        self.markers(self.data.sites_by_country(country_id))
    }

    fn markers(&self, sites: Vec<Site>) -> Vec<SiteMarker> {
        let countries = self.data.all_countries();
        let minerals = self.data.all_minerals();

        sites
            .into_iter()
            .map(|site| {
                let country_name = countries
                    .iter()
                    .find(|c| c.country_id == site.country_id)
                    .map(|c| c.country_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                let mineral_name = minerals
                    .iter()
                    .find(|m| m.mineral_id == site.mineral_id)
                    .map(|m| m.mineral_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());

                SiteMarker {
                    site_name: site.site_name,
                    latitude: site.latitude,
                    longitude: site.longitude,
                    country_name,
                    mineral_name,
                    production_tonnes: site.production_tonnes,
                }
            })
            .collect()
    }
}
