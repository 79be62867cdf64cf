use farebox::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDto {
    pub zone: u32,
    pub name: String,
}

impl ZoneDto {
    pub fn from(zone: &Zone) -> Self {
        Self {
            zone: zone.zone,
            name: zone.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoDto {
    pub title: Option<String>,
    pub info: HashMap<String, String>,
}

impl InfoDto {
    pub fn from(table: &FareTable) -> Self {
        Self {
            title: table.title.clone(),
            info: table.info.clone(),
        }
    }
}
