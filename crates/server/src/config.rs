use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Fare table location. A `.zip` is read as a bundle, a directory as csv
    /// files, anything else as json.
    pub table_path: PathBuf,
}

impl Config {
    /// Reads `FAREBOX_PORT` and `FAREBOX_TABLE`. A first command line argument
    /// overrides the table path.
    pub fn load() -> Self {
        let table_path = env::args()
            .nth(1)
            .unwrap_or_else(|| load_or("FAREBOX_TABLE", "fares.json".to_string()));
        Self {
            port: load_or("FAREBOX_PORT", 3000),
            table_path: table_path.into(),
        }
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            warn!("Invalid {key} value {value:?}: {err}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
