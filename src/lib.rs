//! Zoned transit fare engine.
//!
//! A [`FareTable`](table::FareTable) is loaded once through a
//! [`Source`](source::Source) and then priced against as many times as needed
//! with [`calculate_fare`](calculator::calculate_fare).
//!
//! ```
//! use farebox::prelude::*;
//!
//! let table = farebox::source::from_json_str(
//!     r#"{"info":{"weekday":"Valid Monday to Friday"},"zones":[{"zone":1,"name":"CBD",
//!        "fares":[{"type":"weekday","purchase":"advance_purchase","trips":1,"price":4.75}]}]}"#,
//! )
//! .unwrap();
//! let input = CalculationInput::new(1, FareType::Weekday, PurchaseChannel::AdvancePurchase, 3.0);
//! let result = calculate_fare(&input, &table);
//! assert_eq!(format_usd(result.total), "$14.25");
//! ```
pub mod calculator;
pub mod shared;
pub mod source;
pub mod store;
pub mod table;

pub mod prelude {
    pub use crate::calculator::{
        CalculationInput, FareError, FareResult, ZoneQuery, calculate_batch, calculate_fare,
        try_calculate_fare,
    };
    pub use crate::shared::{ServiceCalendar, format_usd};
    pub use crate::source::Source;
    pub use crate::store::{Identifiable, MemoryStore, OptimisticCache, Store, StoreError};
    pub use crate::table::{Fare, FareTable, FareType, PurchaseChannel, Zone};
}
