//! File loading: extension gating and line splitting ahead of parsing.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::FastxError;
use crate::policy::ParseOptions;
use crate::record_set::RecordSet;

/// Extensions (case-sensitive) accepted by [`load_path`].
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["fa", "fasta", "fq", "fastq"];

pub fn is_supported_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Read all lines, stripping `\n` / `\r\n` and dropping trailing blank lines.
pub fn read_lines<R: BufRead>(mut rdr: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = String::with_capacity(256);
    loop {
        buf.clear();
        if rdr.read_line(&mut buf)? == 0 {
            break;
        }
        lines.push(strip_terminator(&buf).to_owned());
    }
    trim_trailing_blank(&mut lines);
    Ok(lines)
}

/// Same as [`read_lines`] over text already in memory, borrowing from it.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split_inclusive('\n').map(strip_terminator).collect();
    trim_trailing_blank(&mut lines);
    lines
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn trim_trailing_blank<S: AsRef<str>>(lines: &mut Vec<S>) {
    while lines.last().is_some_and(|l| l.as_ref().is_empty()) {
        lines.pop();
    }
}

/// Parse everything readable from `rdr` (stdin, in-memory buffers, ...).
pub fn load_bufread<R: BufRead>(rdr: R, opts: &ParseOptions) -> Result<RecordSet, FastxError> {
    let lines = read_lines(rdr).map_err(|e| FastxError::io_err(e, None))?;
    RecordSet::from_lines(&lines, opts)
}

/// Load a `.fa`, `.fasta`, `.fq` or `.fastq` file.
pub fn load_path<P: AsRef<Path>>(path: P, opts: &ParseOptions) -> Result<RecordSet, FastxError> {
    let path = path.as_ref();
    if !is_supported_path(path) {
        return Err(FastxError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }
    let io_err = |e: io::Error| FastxError::io_err(e, Some(path.to_path_buf()));
    let f = File::open(path).map_err(io_err)?;

    #[cfg(feature = "mmap")]
    let set = {
        use memmap2::Mmap;
        if f.metadata().map_err(io_err)?.len() == 0 {
            RecordSet::default()
        } else {
            // The map is only read while the file stays open in this scope.
            let mmap = unsafe { Mmap::map(&f) }.map_err(io_err)?;
            let text = std::str::from_utf8(&mmap)
                .map_err(|e| io_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            RecordSet::from_lines(&split_lines(text), opts)?
        }
    };
    #[cfg(not(feature = "mmap"))]
    let set = {
        let lines = read_lines(io::BufReader::with_capacity(256 * 1024, f)).map_err(io_err)?;
        RecordSet::from_lines(&lines, opts)?
    };

    log::info!("loaded {} records from {}", set.len(), path.display());
    Ok(set)
}
