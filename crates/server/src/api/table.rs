use crate::{
    dto::{InfoDto, ZoneDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn zones(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let table = state.table.read().await;
    let table = table.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    let result: Vec<_> = table.zones.iter().map(ZoneDto::from).collect();
    Ok(Json(result).into_response())
}

pub async fn info(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let table = state.table.read().await;
    let table = table.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;
    Ok(Json(InfoDto::from(table)).into_response())
}
