//! Phred+33 quality decoding.

use crate::error::FormatError;

/// Offset of the Phred+33 (Sanger / Illumina 1.8+) encoding.
pub const PHRED_OFFSET: u8 = 33;
/// Highest score a printable symbol (`~`) can encode.
pub const MAX_QSCORE: u8 = 126 - PHRED_OFFSET;

/// Decode a quality string into Phred scores (`codepoint - 33`).
///
/// Every symbol must be printable ASCII in `33..=126`.
pub fn decode(quality: &str) -> Result<Vec<u8>, FormatError> {
    quality
        .chars()
        .enumerate()
        .map(|(pos, symbol)| match u8::try_from(symbol) {
            Ok(b @ 33..=126) => Ok(b - PHRED_OFFSET),
            _ => Err(FormatError::InvalidQualitySymbol { symbol, pos }),
        })
        .collect()
}

/// Arithmetic mean of `scores`; `None` for an empty slice.
pub fn mean(scores: &[u8]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: u64 = scores.iter().map(|&q| q as u64).sum();
    Some(sum as f64 / scores.len() as f64)
}

/// Decoded quality of one read.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityData {
    symbols: String,
    scores: Vec<u8>,
    mean: f64,
}

impl QualityData {
    /// Decode `symbols`. Fails on an empty string or an out-of-range symbol.
    pub fn decode(symbols: &str) -> Result<Self, FormatError> {
        let scores = decode(symbols)?;
        let mean = mean(&scores).ok_or(FormatError::EmptySequence)?;
        Ok(Self {
            symbols: symbols.to_owned(),
            scores,
            mean,
        })
    }

    /// The raw quality string as read from the file.
    pub fn symbols(&self) -> &str {
        &self.symbols
    }
    pub fn scores(&self) -> &[u8] {
        &self.scores
    }
    pub fn mean(&self) -> f64 {
        self.mean
    }
    pub fn len(&self) -> usize {
        self.scores.len()
    }
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Per-read quality: present for FASTQ input, absent for FASTA input.
#[derive(Debug, Clone, PartialEq)]
pub enum Quality {
    Present(QualityData),
    Absent,
}

impl Quality {
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Quality::Present(_))
    }

    pub fn as_present(&self) -> Option<&QualityData> {
        match self {
            Quality::Present(q) => Some(q),
            Quality::Absent => None,
        }
    }

    pub fn symbols(&self) -> Option<&str> {
        self.as_present().map(QualityData::symbols)
    }
    pub fn scores(&self) -> Option<&[u8]> {
        self.as_present().map(QualityData::scores)
    }
    pub fn mean(&self) -> Option<f64> {
        self.as_present().map(QualityData::mean)
    }
}
