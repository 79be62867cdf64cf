use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, BufReader, Read, Seek},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info};
use zip::ZipArchive;

mod config;
pub mod models;
pub use config::*;
use models::*;

use crate::table::{Fare, FareTable, Zone};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Fare references unknown zone: {0}")]
    UnknownZone(u32),
    #[error("No storage configured")]
    NoStorage,
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Json(PathBuf),
    Csv(PathBuf),
    Zip(PathBuf),
}

/// Where a [`FareTable`] is read from.
#[derive(Default)]
pub struct Source {
    config: Config,
    storage: StorageType,
}

impl Source {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_json<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage = StorageType::Json(path.as_ref().to_path_buf());
        self
    }

    /// Directory holding the zones, fares and info csv files.
    pub fn from_csv<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.storage = StorageType::Csv(dir.as_ref().to_path_buf());
        self
    }

    pub fn from_zip<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage = StorageType::Zip(path.as_ref().to_path_buf());
        self
    }

    pub fn load(&self) -> Result<FareTable, self::Error> {
        let table = match &self.storage {
            StorageType::None => return Err(self::Error::NoStorage),
            StorageType::Json(path) => {
                debug!("Reading fare table from {}", path.display());
                from_json_reader(BufReader::new(File::open(path)?))?
            }
            StorageType::Csv(dir) => load_csv_dir(dir, &self.config)?,
            StorageType::Zip(path) => {
                debug!("Reading fare bundle {}", path.display());
                from_zip_reader(File::open(path)?, &self.config)?
            }
        };
        info!(
            "Loaded fare table with {} zones and {} fares",
            table.zones.len(),
            table.zones.iter().map(|zone| zone.fares.len()).sum::<usize>()
        );
        Ok(table)
    }
}

pub fn from_json_str(json: &str) -> Result<FareTable, self::Error> {
    Ok(serde_json::from_str(json)?)
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<FareTable, self::Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a zipped bundle. A bundle carrying the json table is read as json,
/// otherwise the csv files are used.
pub fn from_zip_reader<R: Read + Seek>(
    reader: R,
    config: &Config,
) -> Result<FareTable, self::Error> {
    let mut archive = ZipArchive::new(reader)?;
    if archive.index_for_name(&config.table_file_name).is_some() {
        debug!("Bundle contains {}", config.table_file_name);
        let file = archive.by_name(&config.table_file_name)?;
        return from_json_reader(file);
    }

    let zones: Vec<CsvZone> = read_csv_from_zip(&mut archive, &config.zones_file_name)?
        .ok_or_else(|| self::Error::FileNotFound(config.zones_file_name.clone()))?;
    let fares: Vec<CsvFare> = read_csv_from_zip(&mut archive, &config.fares_file_name)?
        .ok_or_else(|| self::Error::FileNotFound(config.fares_file_name.clone()))?;
    let info: Vec<CsvInfo> =
        read_csv_from_zip(&mut archive, &config.info_file_name)?.unwrap_or_default();
    assemble(zones, fares, info)
}

fn load_csv_dir(dir: &Path, config: &Config) -> Result<FareTable, self::Error> {
    debug!("Reading fare csv files from {}", dir.display());
    let zones: Vec<CsvZone> = read_csv_file(&dir.join(&config.zones_file_name))?
        .ok_or_else(|| self::Error::FileNotFound(config.zones_file_name.clone()))?;
    let fares: Vec<CsvFare> = read_csv_file(&dir.join(&config.fares_file_name))?
        .ok_or_else(|| self::Error::FileNotFound(config.fares_file_name.clone()))?;
    let info: Vec<CsvInfo> =
        read_csv_file(&dir.join(&config.info_file_name))?.unwrap_or_default();
    assemble(zones, fares, info)
}

/// Builds the table keeping file order. Fares go to the first zone with a
/// matching number.
fn assemble(
    zones: Vec<CsvZone>,
    fares: Vec<CsvFare>,
    info: Vec<CsvInfo>,
) -> Result<FareTable, self::Error> {
    let mut table = FareTable::new();
    table.zones = zones
        .into_iter()
        .map(|zone| Zone {
            zone: zone.zone,
            name: zone.name,
            fares: Vec::new(),
        })
        .collect();

    for fare in fares {
        let zone = table
            .zones
            .iter_mut()
            .find(|zone| zone.zone == fare.zone)
            .ok_or(self::Error::UnknownZone(fare.zone))?;
        zone.fares.push(Fare {
            fare_type: fare.fare_type,
            purchase: fare.purchase,
            trips: fare.trips,
            price: fare.price,
        });
    }

    table.info = info
        .into_iter()
        .map(|row| (row.key, row.message))
        .collect();
    Ok(table)
}

fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, self::Error> {
    if !path.exists() {
        debug!("{} not present", path.display());
        return Ok(None);
    }
    let file = File::open(path)?;
    parse_csv(file).map(Some)
}

fn read_csv_from_zip<T, R>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<Vec<T>>, self::Error>
where
    T: DeserializeOwned,
    R: Read + Seek,
{
    let Some(index) = archive.index_for_name(name) else {
        debug!("{name} not present in bundle");
        return Ok(None);
    };
    let file = archive.by_index(index)?;
    parse_csv(file).map(Some)
}

fn parse_csv<R, T>(reader: R) -> Result<Vec<T>, self::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result?;
        rows.push(row);
    }
    Ok(rows)
}
