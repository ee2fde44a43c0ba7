#![cfg(feature = "async")]

use crate::error::FastxError;
use crate::loader::is_supported_path;
use crate::policy::ParseOptions;
use crate::record_set::RecordSet;

use std::path::Path;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};

/// Async counterpart of [`crate::loader::read_lines`].
pub async fn read_lines_async<R>(mut rdr: R) -> io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = Vec::new();
    let mut buf = String::with_capacity(256);
    loop {
        buf.clear();
        if rdr.read_line(&mut buf).await? == 0 {
            break;
        }
        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
        lines.push(buf.clone());
    }
    while lines.last().is_some_and(|l: &String| l.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Parse everything readable from an async reader.
pub async fn load_async_bufread<R>(reader: R, opts: &ParseOptions) -> Result<RecordSet, FastxError>
where
    R: AsyncBufRead + Unpin,
{
    let lines = read_lines_async(reader)
        .await
        .map_err(|e| FastxError::io_err(e, None))?;
    RecordSet::from_lines(&lines, opts)
}

/// Async counterpart of [`crate::loader::load_path`]. Parsing itself runs
/// synchronously once all lines are in memory.
pub async fn load_path_async<P: AsRef<Path>>(
    path: P,
    opts: &ParseOptions,
) -> Result<RecordSet, FastxError> {
    let path = path.as_ref();
    if !is_supported_path(path) {
        return Err(FastxError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    let f = File::open(path)
        .await
        .map_err(|e| FastxError::io_err(e, Some(path.to_path_buf())))?;
    let lines = read_lines_async(BufReader::with_capacity(256 * 1024, f))
        .await
        .map_err(|e| FastxError::io_err(e, Some(path.to_path_buf())))?;
    let set = RecordSet::from_lines(&lines, opts)?;
    log::info!("loaded {} records from {}", set.len(), path.display());
    Ok(set)
}
