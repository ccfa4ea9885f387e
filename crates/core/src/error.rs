use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not enough space to generate non-overlapping ranges (usable span {span}, required {required})")]
    Capacity { span: i128, required: i128 },

    #[error("Invalid bounds: start {start} exceeds end {end}")]
    InvalidBounds { start: u64, end: u64 },

    #[error("Range length must be at least 1")]
    ZeroLength,

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in file '{path}': {source}")]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level JSON value in '{path}' is not a list")]
    NotAList { path: std::path::PathBuf },
}

pub type Result<T> = std::result::Result<T, CoreError>;
