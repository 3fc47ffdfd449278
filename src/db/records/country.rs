use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `countries.csv`: a mineral-producing country with its
/// economic indicators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    #[serde(rename = "CountryID")]
    pub country_id: u32,
    #[serde(rename = "CountryName")]
    pub country_name: String,
    #[serde(rename = "GDP_BillionUSD")]
    pub gdp_billion_usd: f64,
    #[serde(rename = "MiningRevenue_BillionUSD")]
    pub mining_revenue_billion_usd: f64,
    #[serde(rename = "KeyProjects")]
    pub key_projects: String,
}

impl Country {
    /// Mining's share of GDP as a percentage; 0 when GDP is not positive.
    pub fn mining_contribution_pct(&self) -> f64 {
        if self.gdp_billion_usd > 0.0 {
            (self.mining_revenue_billion_usd / self.gdp_billion_usd) * 100.0
        } else {
            0.0
        }
    }
}

impl TableRecord for Country {
    const TABLE: &'static str = "countries";

    fn id(&self) -> u32 {
        self.country_id
    }
}

/// Outward shape: stored fields plus the derived contribution percentage.
#[derive(Debug, Serialize)]
pub struct CountryView {
    pub country_id: u32,
    pub country_name: String,
    pub gdp_billion_usd: f64,
    pub mining_revenue_billion_usd: f64,
    pub key_projects: String,
    pub mining_contribution_pct: f64,
}

impl From<&Country> for CountryView {
    fn from(country: &Country) -> Self {
        Self {
            country_id: country.country_id,
            country_name: country.country_name.clone(),
            gdp_billion_usd: country.gdp_billion_usd,
            mining_revenue_billion_usd: country.mining_revenue_billion_usd,
            key_projects: country.key_projects.clone(),
            mining_contribution_pct: country.mining_contribution_pct(),
        }
    }
}
