use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `sites.csv`: a mining site with its coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Site {
    #[serde(rename = "SiteID")]
    pub site_id: u32,
    #[serde(rename = "SiteName")]
    pub site_name: String,
    #[serde(rename = "CountryID")]
    pub country_id: u32,
    #[serde(rename = "MineralID")]
    pub mineral_id: u32,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Production_tonnes")]
    pub production_tonnes: u64,
}

impl TableRecord for Site {
    const TABLE: &'static str = "sites";

    fn id(&self) -> u32 {
        self.site_id
    }
}

#[derive(Debug, Serialize)]
pub struct SiteView {
    pub site_id: u32,
    pub site_name: String,
    pub country_id: u32,
    pub mineral_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub production_tonnes: u64,
}

impl From<&Site> for SiteView {
    fn from(site: &Site) -> Self {
        Self {
            site_id: site.site_id,
            site_name: site.site_name.clone(),
            country_id: site.country_id,
            mineral_id: site.mineral_id,
            latitude: site.latitude,
            longitude: site.longitude,
            production_tonnes: site.production_tonnes,
        }
    }
}
