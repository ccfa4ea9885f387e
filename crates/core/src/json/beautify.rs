use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CoreError, Result};

use super::read_json;

/// Re-emits the JSON document at `input` pretty-printed to `output`:
/// 2-space indent, object keys in sorted order, non-ASCII text kept literal.
///
/// # Errors
///
/// - [`CoreError::FileRead`] when `input` cannot be opened or read.
/// - [`CoreError::Json`] when `input` is not valid JSON.
/// - [`CoreError::FileWrite`] when `output` cannot be created or written.
pub fn beautify_file(input: &Path, output: &Path) -> Result<()> {
    let value = read_json(input)?;
    let body = serde_json::to_string_pretty(&value).map_err(|source| CoreError::Json {
        path: input.to_path_buf(),
        source,
    })?;

    let map_io = |source: std::io::Error| CoreError::FileWrite {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(map_io)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{body}").map_err(map_io)?;
    writer.flush().map_err(map_io)
}
