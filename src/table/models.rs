use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseKeyError {
    kind: &'static str,
    value: String,
}

/// Ride-time category that governs the price of a ride.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FareType {
    Weekday,
    EveningWeekend,
    Anytime,
}

impl FareType {
    pub const ALL: [FareType; 3] = [Self::Weekday, Self::EveningWeekend, Self::Anytime];

    /// Key used on the wire and in [`FareTable::info`](super::FareTable::info).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::EveningWeekend => "evening_weekend",
            Self::Anytime => "anytime",
        }
    }
}

impl fmt::Display for FareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FareType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.key() == s)
            .ok_or_else(|| ParseKeyError {
                kind: "fare type",
                value: s.to_string(),
            })
    }
}

/// Where the ticket is bought.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseChannel {
    AdvancePurchase,
    OnboardPurchase,
}

impl PurchaseChannel {
    pub const ALL: [PurchaseChannel; 2] = [Self::AdvancePurchase, Self::OnboardPurchase];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::AdvancePurchase => "advance_purchase",
            Self::OnboardPurchase => "onboard_purchase",
        }
    }
}

impl fmt::Display for PurchaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PurchaseChannel {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.key() == s)
            .ok_or_else(|| ParseKeyError {
                kind: "purchase channel",
                value: s.to_string(),
            })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fare {
    #[serde(rename = "type")]
    pub fare_type: FareType,
    pub purchase: PurchaseChannel,
    /// Number of rides covered by `price`.
    pub trips: u32,
    pub price: f64,
}

impl Fare {
    pub fn matches(&self, fare_type: FareType, purchase: PurchaseChannel, trips: u32) -> bool {
        self.fare_type == fare_type && self.purchase == purchase && self.trips == trips
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Zone {
    pub zone: u32,
    pub name: String,
    #[serde(default)]
    pub fares: Vec<Fare>,
}

impl Zone {
    /// First fare matching the combination, in table order.
    pub fn find_fare(
        &self,
        fare_type: FareType,
        purchase: PurchaseChannel,
        trips: u32,
    ) -> Option<&Fare> {
        self.fares
            .iter()
            .find(|fare| fare.matches(fare_type, purchase, trips))
    }
}
