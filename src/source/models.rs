use serde::{Deserialize, Serialize};

use crate::table::{FareType, PurchaseChannel};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvZone {
    pub zone: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvFare {
    pub zone: u32,
    #[serde(rename = "type")]
    pub fare_type: FareType,
    pub purchase: PurchaseChannel,
    pub trips: u32,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvInfo {
    pub key: String,
    pub message: String,
}
