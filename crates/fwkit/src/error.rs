use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FwkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a CSV file: {0}")]
    NotCsv(PathBuf),

    #[error("No parseable table in {0}")]
    EmptyTable(PathBuf),

    #[error("CSV parse error at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("No classified rules to export")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, FwkitError>;
