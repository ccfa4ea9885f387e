//! JSON companion tools: pretty-printing and top-level list comparison.

pub mod beautify;
pub mod compare;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, Result};

/// Loads an arbitrary JSON document from `path`.
pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|source| CoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
