use farebox::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareDto {
    pub unit_price: f64,
    pub total: f64,
    pub message: String,
    pub formatted_unit_price: String,
    pub formatted_total: String,
}

impl FareDto {
    pub fn from(result: FareResult) -> Self {
        let formatted_unit_price = format_usd(result.unit_price);
        let formatted_total = format_usd(result.total);
        Self {
            unit_price: result.unit_price,
            total: result.total,
            message: result.message,
            formatted_unit_price,
            formatted_total,
        }
    }
}
