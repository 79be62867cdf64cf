mod fare;
mod reload;
mod table;

pub use fare::*;
pub use reload::*;
pub use table::*;

use crate::state::AppState;
use axum::routing::{get, post};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/zones", get(zones))
        .route("/info", get(info))
        .route("/fare", get(fare))
        .route("/fares", post(fares))
        .route("/reload", post(reload))
        .with_state(state)
}
