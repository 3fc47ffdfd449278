use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `production_stats.csv`: production of one mineral in one
/// country for one year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductionStats {
    #[serde(rename = "StatID")]
    pub stat_id: u32,
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "CountryID")]
    pub country_id: u32,
    #[serde(rename = "MineralID")]
    pub mineral_id: u32,
    #[serde(rename = "Production_tonnes")]
    pub production_tonnes: u64,
    #[serde(rename = "ExportValue_BillionUSD")]
    pub export_value_billion_usd: f64,
}

impl ProductionStats {
    /// Realized USD per tonne from export value; 0 when nothing was produced.
    pub fn avg_price_per_tonne(&self) -> f64 {
        if self.production_tonnes > 0 {
            (self.export_value_billion_usd * 1_000_000_000.0) / self.production_tonnes as f64
        } else {
            0.0
        }
    }
}

impl TableRecord for ProductionStats {
    const TABLE: &'static str = "production_stats";

    fn id(&self) -> u32 {
        self.stat_id
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionStatsView {
    pub stat_id: u32,
    pub year: u32,
    pub country_id: u32,
    pub mineral_id: u32,
    pub production_tonnes: u64,
    pub export_value_billion_usd: f64,
    pub avg_price_per_tonne: f64,
}

impl From<&ProductionStats> for ProductionStatsView {
    fn from(stat: &ProductionStats) -> Self {
        Self {
            stat_id: stat.stat_id,
            year: stat.year,
            country_id: stat.country_id,
            mineral_id: stat.mineral_id,
            production_tonnes: stat.production_tonnes,
            export_value_billion_usd: stat.export_value_billion_usd,
            avg_price_per_tonne: stat.avg_price_per_tonne(),
        }
    }
}
