use rayon::prelude::*;
use tracing::trace;

mod input;
mod result;
pub use input::*;
pub use result::*;

use crate::table::{FareTable, FareType};

/// Trips in an anytime bundle.
pub const BUNDLE_TRIPS: u32 = 10;

/// Prices `input` against `table`. Never fails: a missing zone or fare gives a
/// zero priced result whose message says what went wrong, see
/// [`try_calculate_fare`] to tell the two apart from a free fare.
pub fn calculate_fare(input: &CalculationInput, table: &FareTable) -> FareResult {
    try_calculate_fare(input, table).unwrap_or_else(FareResult::from_error)
}

/// Same pricing rules as [`calculate_fare`], with failures kept as errors.
pub fn try_calculate_fare(
    input: &CalculationInput,
    table: &FareTable,
) -> Result<FareResult, FareError> {
    let zone = table
        .find_zone(&input.zone)
        .ok_or_else(|| FareError::ZoneNotFound(input.zone.clone()))?;

    if input.fare_type == FareType::Anytime {
        if let Some(fare) = zone.find_fare(FareType::Anytime, input.purchase, BUNDLE_TRIPS) {
            let bundle_trips = f64::from(BUNDLE_TRIPS);
            let books = (input.rides / bundle_trips).ceil();
            trace!("Zone {} needs {books} anytime books", zone.zone);
            return Ok(FareResult::new(
                fare.price / bundle_trips,
                fare.price * books,
                table.message(FareType::Anytime.key()),
            ));
        }
        // No bundle priced, fall back to a single anytime ride.
        trace!("Zone {} has no anytime bundle", zone.zone);
    }

    let fare = zone
        .find_fare(input.fare_type, input.purchase, 1)
        .ok_or(FareError::FareNotFound {
            zone: zone.zone,
            fare_type: input.fare_type,
            purchase: input.purchase,
        })?;
    Ok(FareResult::new(
        fare.price,
        fare.price * input.rides,
        table.message(input.fare_type.key()),
    ))
}

/// Prices every input in parallel. Results keep the order of `inputs`.
pub fn calculate_batch(inputs: &[CalculationInput], table: &FareTable) -> Vec<FareResult> {
    inputs
        .par_iter()
        .map(|input| calculate_fare(input, table))
        .collect()
}
