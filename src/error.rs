use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 1-based, inclusive range of input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// Span covering the half-open 0-based window `[from, to)`.
    pub(crate) fn from_window(from: usize, to: usize) -> Self {
        Self {
            start: from + 1,
            end: to.max(from + 1),
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "line {}", self.start)
        } else {
            write!(f, "lines {}-{}", self.start, self.end)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("paragraph has {len} lines, expected 2 (FASTA) or 4 (FASTQ)")]
    MalformedParagraph { len: usize },
    #[error("sequence line has no header line before it")]
    MissingHeader,
    #[error("lines do not belong to any record")]
    OrphanLines,
    #[error("missing '+' separator line")]
    MissingSeparator,
    #[error("empty sequence")]
    EmptySequence,
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
    #[error("quality symbol {symbol:?} at position {pos} is outside the Phred+33 range")]
    InvalidQualitySymbol { symbol: char, pos: usize },
}

#[derive(Debug, Error)]
pub enum FastxError {
    #[error("I/O error reading {path:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },
    #[error("unsupported file format: {path:?} (expected .fa, .fasta, .fq or .fastq)")]
    UnsupportedFormat { path: PathBuf },
    #[error("format error at {ctx}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: LineSpan,
    },
    #[error("invalid length comparator {0:?} (expected one of =, >, <, !=)")]
    InvalidComparator(String),
    #[error("invalid sequence pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl FastxError {
    pub(crate) fn io_err(source: io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: LineSpan) -> Self {
        Self::Format { source, ctx }
    }
}
