use crate::{dto::FareDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use farebox::prelude::*;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

pub async fn fare(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let input = input_from_params(&params)?;
    let table = state.table.read().await;
    let table = table.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let result = calculate_fare(&input, table);
    Ok(Json(FareDto::from(result)).into_response())
}

pub async fn fares(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<Vec<CalculationInput>>,
) -> Result<Response, StatusCode> {
    let table = state.table.read().await;
    let table = table.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let result: Vec<_> = calculate_batch(&inputs, table)
        .into_iter()
        .map(FareDto::from)
        .collect();
    Ok(Json(result).into_response())
}

/// `zone` and `purchase` are required. `type` defaults to the category in
/// effect right now and `rides` to one.
fn input_from_params(params: &HashMap<String, String>) -> Result<CalculationInput, StatusCode> {
    let zone = params.get("zone").ok_or(StatusCode::BAD_REQUEST)?;
    let purchase: PurchaseChannel = params
        .get("purchase")
        .ok_or(StatusCode::BAD_REQUEST)?
        .parse()
        .map_err(|err| {
            debug!("Bad purchase param: {err}");
            StatusCode::BAD_REQUEST
        })?;
    let fare_type: FareType = match params.get("type") {
        Some(value) => value.parse().map_err(|err| {
            debug!("Bad type param: {err}");
            StatusCode::BAD_REQUEST
        })?,
        None => ServiceCalendar::default().current_fare_type(),
    };
    let rides: f64 = match params.get("rides") {
        Some(value) => value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
        None => 1.0,
    };
    Ok(CalculationInput::new(
        zone.as_str(),
        fare_type,
        purchase,
        rides,
    ))
}
