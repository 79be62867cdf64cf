use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::{FareType, PurchaseChannel, Zone};

/// Rider supplied zone reference, either a zone number or a zone name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ZoneQuery {
    Number(f64),
    Name(String),
}

impl ZoneQuery {
    /// A number only matches `Zone::zone`. Text matches `Zone::name` exactly
    /// or `Zone::zone` after numeric coercion, so `"2"` finds zone 2.
    pub fn matches(&self, zone: &Zone) -> bool {
        match self {
            Self::Number(number) => f64::from(zone.zone) == *number,
            Self::Name(name) => {
                coerce_number(name).is_some_and(|number| f64::from(zone.zone) == number)
                    || zone.name == *name
            }
        }
    }
}

impl fmt::Display for ZoneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for ZoneQuery {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for ZoneQuery {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ZoneQuery {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for ZoneQuery {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Text to number coercion following the rules browsers apply to form
/// values: surrounding whitespace is ignored, blank text is zero and `0x`,
/// `0o`, `0b` prefixes select a radix. `None` stands for NaN.
pub(crate) fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => (),
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    // Rust also accepts "inf" and "nan" spellings, the coercion does not.
    if text
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    text.parse().ok()
}

/// Unsigned digits in `radix`, any width. Up to 128 bits the value is
/// rounded once, wider text is folded digit by digit.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if let Ok(value) = u128::from_str_radix(digits, radix) {
        return Some(value as f64);
    }
    digits.chars().try_fold(0.0, |value: f64, c| {
        Some(value * f64::from(radix) + f64::from(c.to_digit(radix)?))
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationInput {
    pub zone: ZoneQuery,
    #[serde(rename = "type")]
    pub fare_type: FareType,
    pub purchase: PurchaseChannel,
    /// Not validated. Negative or fractional counts flow into the totals as is.
    pub rides: f64,
}

impl CalculationInput {
    pub fn new(
        zone: impl Into<ZoneQuery>,
        fare_type: FareType,
        purchase: PurchaseChannel,
        rides: f64,
    ) -> Self {
        Self {
            zone: zone.into(),
            fare_type,
            purchase,
            rides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_plain_numbers() {
        assert_eq!(coerce_number("2"), Some(2.0));
        assert_eq!(coerce_number(" 3 "), Some(3.0));
        assert_eq!(coerce_number("2.50"), Some(2.5));
        assert_eq!(coerce_number("1e1"), Some(10.0));
    }

    #[test]
    fn coerce_blank_is_zero() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("   "), Some(0.0));
    }

    #[test]
    fn coerce_radix_prefixes() {
        assert_eq!(coerce_number("0x10"), Some(16.0));
        assert_eq!(coerce_number("0b11"), Some(3.0));
        assert_eq!(coerce_number("0o7"), Some(7.0));
        assert_eq!(coerce_number("0xZZ"), None);
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0x+1"), None);
    }

    #[test]
    fn coerce_wide_radix_text() {
        assert_eq!(
            coerce_number("0x10000000000000000"),
            Some(18_446_744_073_709_551_616.0)
        );
        let wide = format!("0x1{}", "0".repeat(40));
        assert_eq!(coerce_number(&wide), Some(2f64.powi(160)));
        let wide = format!("0b1{}", "0".repeat(130));
        assert_eq!(coerce_number(&wide), Some(2f64.powi(130)));
    }

    #[test]
    fn coerce_rejects_text() {
        assert_eq!(coerce_number("B"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("2 zones"), None);
        assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn number_query_ignores_names() {
        let zone = Zone {
            zone: 7,
            name: "7".into(),
            fares: Vec::new(),
        };
        assert!(ZoneQuery::from(7).matches(&zone));
        assert!(!ZoneQuery::from(8).matches(&zone));
        assert!(ZoneQuery::from("7").matches(&zone));
    }

    #[test]
    fn zone_query_from_json() {
        let number: ZoneQuery = serde_json::from_str("2").unwrap();
        assert_eq!(number, ZoneQuery::Number(2.0));
        let name: ZoneQuery = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(name, ZoneQuery::Name("B".into()));
    }
}
