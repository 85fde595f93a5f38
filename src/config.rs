use std::path::{Path, PathBuf};

use crate::filters::City;

/// Backing file per city, relative to the data directory.
pub fn city_file_name(city: City) -> &'static str {
    match city {
        City::Chicago => "chicago.csv",
        City::NewYork => "new_york_city.csv",
        City::Washington => "washington.csv",
    }
}

/// Runtime settings, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the trip log for `city`.
    pub fn city_file(&self, city: City) -> PathBuf {
        self.data_dir.join(city_file_name(city))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
