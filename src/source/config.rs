/// File names looked up inside a fare bundle directory or zip archive.
pub struct Config {
    pub table_file_name: String,
    pub zones_file_name: String,
    pub fares_file_name: String,
    pub info_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_file_name: "fares.json".into(),
            zones_file_name: "zones.csv".into(),
            fares_file_name: "fares.csv".into(),
            info_file_name: "info.csv".into(),
        }
    }
}
