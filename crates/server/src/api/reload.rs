use crate::state::{AppState, load_table};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use farebox::prelude::*;
use futures_util::StreamExt;
use reqwest::header::ACCEPT_ENCODING;
use std::{
    collections::HashMap,
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, io::AsyncWriteExt};
use tracing::{error, info, warn};

/// Swaps in a new fare table. With `q` the table is downloaded next to the
/// table path and only replaces it once it loads, otherwise the table path
/// is read again.
pub async fn reload(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let table = match params.get("q") {
        Some(url) => replace_from_url(url, &state.table_path).await?,
        None => load_table(&state.table_path).map_err(|err| {
            error!("Failed to load fare table: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?,
    };
    info!("Reloaded fare table with {} zones", table.zones.len());
    let _ = state.table.write().await.replace(table);
    Ok(().into_response())
}

async fn replace_from_url(url: &str, table_path: &Path) -> Result<FareTable, StatusCode> {
    if table_path.is_dir() {
        warn!(
            "Refusing download, {} is a csv directory",
            table_path.display()
        );
        return Err(StatusCode::BAD_REQUEST);
    }

    let staging = staging_path(table_path)?;
    let staged = match stage(url, &staging).await {
        Ok(table) => fs::rename(&staging, table_path).await.map(|_| table).map_err(|err| {
            error!("Failed to move download into place: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }),
        Err(status) => Err(status),
    };
    if staged.is_err() {
        let _ = fs::remove_file(&staging).await;
    }
    staged
}

/// Sibling of `table_path` keeping its extension, so the same loader applies.
fn staging_path(table_path: &Path) -> Result<PathBuf, StatusCode> {
    let name = table_path.file_name().ok_or_else(|| {
        error!("Table path {} has no file name", table_path.display());
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let mut staged = OsString::from(".download-");
    staged.push(name);
    Ok(table_path.with_file_name(staged))
}

async fn stage(url: &str, staging: &Path) -> Result<FareTable, StatusCode> {
    download_to(url, staging).await?;
    load_table(staging).map_err(|err| {
        error!("Downloaded fare table is invalid: {err}");
        StatusCode::BAD_REQUEST
    })
}

async fn download_to(url: &str, path: &Path) -> Result<(), StatusCode> {
    let response = reqwest::Client::new()
        .get(url)
        .header(ACCEPT_ENCODING, "gzip, deflate")
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| {
            error!("Failed to fetch fare table: {err}");
            StatusCode::BAD_REQUEST
        })?;

    let write_failed = |err: std::io::Error| {
        error!("Failed to write {}: {err}", path.display());
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let mut file = fs::File::create(path).await.map_err(write_failed)?;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|err| {
            error!("Fare table download interrupted: {err}");
            StatusCode::BAD_REQUEST
        })?;
        file.write_all(&chunk).await.map_err(write_failed)?;
    }
    file.flush().await.map_err(write_failed)?;
    file.sync_all().await.map_err(write_failed)
}
