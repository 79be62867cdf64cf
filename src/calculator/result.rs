use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ZoneQuery;
use crate::table::{FareType, PurchaseChannel};

/// Why a fare could not be priced. The display strings are what riders see.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FareError {
    #[error("Zone not found")]
    ZoneNotFound(ZoneQuery),
    #[error("No fare for this combo")]
    FareNotFound {
        zone: u32,
        fare_type: FareType,
        purchase: PurchaseChannel,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FareResult {
    /// Price of one ride. For bundles this is the bundle price over its trips.
    pub unit_price: f64,
    pub total: f64,
    pub message: String,
}

impl FareResult {
    pub fn new(unit_price: f64, total: f64, message: impl Into<String>) -> Self {
        Self {
            unit_price,
            total,
            message: message.into(),
        }
    }

    /// Zero priced result carrying the error text as its message.
    pub fn from_error(error: FareError) -> Self {
        Self::new(0.0, 0.0, error.to_string())
    }
}
