use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CoreError, Result};
use crate::interval::Interval;
use crate::options::RangeFormat;

/// Writes the finalized intervals to `path` in the requested format.
///
/// Text output is one `lo-hi` line per interval; JSON output is a
/// pretty-printed array of `{lo, hi}` objects followed by a newline.
///
/// # Errors
///
/// [`CoreError::FileWrite`] when the file cannot be created or written.
pub fn write_ranges(path: &Path, intervals: &[Interval], format: RangeFormat) -> Result<()> {
    let map_io = |source: std::io::Error| CoreError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(map_io)?;
    let mut writer = BufWriter::new(file);
    match format {
        RangeFormat::Text => {
            for interval in intervals {
                writeln!(writer, "{interval}").map_err(map_io)?;
            }
        }
        RangeFormat::Json => {
            let body = serde_json::to_string_pretty(intervals).map_err(|source| CoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
            writeln!(writer, "{body}").map_err(map_io)?;
        }
    }
    writer.flush().map_err(map_io)
}
