use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

mod models;
pub use models::*;

use crate::calculator::ZoneQuery;

/// Fare table as published by the operator. Immutable while pricing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FareTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub info: HashMap<String, String>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl FareTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    /// First zone in table order matching the query by number or by name.
    pub fn find_zone(&self, query: &ZoneQuery) -> Option<&Zone> {
        let zone = self.zones.iter().find(|zone| query.matches(zone));
        trace!(
            "Zone query {:?} resolved to {:?}",
            query,
            zone.map(|zone| zone.zone)
        );
        zone
    }

    /// Explanatory message for a fare type or purchase key, empty when missing.
    pub fn message(&self, key: &str) -> &str {
        self.info.get(key).map(String::as_str).unwrap_or_default()
    }
}
