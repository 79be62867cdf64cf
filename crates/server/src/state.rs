use farebox::{prelude::*, source};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub struct AppState {
    pub table_path: PathBuf,
    pub table: RwLock<Option<FareTable>>,
}

impl AppState {
    pub fn new(table_path: PathBuf, table: Option<FareTable>) -> Self {
        Self {
            table_path,
            table: RwLock::new(table),
        }
    }
}

pub fn load_table(path: &Path) -> Result<FareTable, source::Error> {
    let source = Source::new(source::Config::default());
    let source = if path.is_dir() {
        source.from_csv(path)
    } else if path.extension().is_some_and(|ext| ext == "zip") {
        source.from_zip(path)
    } else {
        source.from_json(path)
    };
    source.load()
}
