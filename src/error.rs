use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read data file '{path}': {source}")]
    DataFile {
        path: PathBuf,
        source: polars::error::PolarsError,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    #[error("InvalidData: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
