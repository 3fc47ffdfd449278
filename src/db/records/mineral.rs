use serde::{Deserialize, Serialize};

use crate::db::store::TableRecord;

/// One row of `minerals.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mineral {
    #[serde(rename = "MineralID")]
    pub mineral_id: u32,
    #[serde(rename = "MineralName")]
    pub mineral_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "MarketPriceUSD_per_tonne")]
    pub market_price_usd_per_tonne: f64,
}

impl Mineral {
    /// Display form of the market price, e.g. `$33,000.00 per tonne`.
    pub fn formatted_price(&self) -> String {
        format!(
            "${} per tonne",
            thousands(self.market_price_usd_per_tonne)
        )
    }
}

impl TableRecord for Mineral {
    const TABLE: &'static str = "minerals";

    fn id(&self) -> u32 {
        self.mineral_id
    }
}

/// Two-decimal rendering with thousands separators in the integer part.
fn thousands(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

#[derive(Debug, Serialize)]
pub struct MineralView {
    pub mineral_id: u32,
    pub mineral_name: String,
    pub description: String,
    pub market_price_usd_per_tonne: f64,
    pub formatted_price: String,
}

impl From<&Mineral> for MineralView {
    fn from(mineral: &Mineral) -> Self {
        Self {
            mineral_id: mineral.mineral_id,
            mineral_name: mineral.mineral_name.clone(),
            description: mineral.description.clone(),
            market_price_usd_per_tonne: mineral.market_price_usd_per_tonne,
            formatted_price: mineral.formatted_price(),
        }
    }
}
