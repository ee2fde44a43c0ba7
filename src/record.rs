use crate::assemble::Paragraph;
use crate::error::{FastxError, FormatError};
use crate::quality::{Quality, QualityData};

/// One read with its derived statistics. Built once, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    header: String,
    sequence: String,
    quality: Quality,
    length: usize,
    n_count: usize,
    gc_proportion: f64,
}

impl Record {
    /// Build a record from an already normalized header.
    ///
    /// Fails if `sequence` is empty (GC proportion would be undefined), if the
    /// quality string length differs from the sequence length, or if a
    /// quality symbol is not Phred+33.
    pub fn new(
        header: impl Into<String>,
        sequence: impl Into<String>,
        quality: Option<&str>,
    ) -> Result<Self, FormatError> {
        let sequence = sequence.into();
        let length = sequence.chars().count();
        if length == 0 {
            return Err(FormatError::EmptySequence);
        }

        let quality = match quality {
            None => Quality::Absent,
            Some(symbols) => {
                let qual = symbols.chars().count();
                if qual != length {
                    return Err(FormatError::LengthMismatch { seq: length, qual });
                }
                Quality::Present(QualityData::decode(symbols)?)
            }
        };

        let gc = sequence.chars().filter(|&b| b == 'G' || b == 'C').count();
        Ok(Self {
            header: header.into(),
            n_count: count_n(&sequence),
            gc_proportion: gc as f64 / length as f64,
            sequence,
            quality,
            length,
        })
    }

    /// Build a record from an assembled paragraph, normalizing its header.
    pub fn from_paragraph(par: &Paragraph<'_>) -> Result<Self, FastxError> {
        let header = normalize_header(par.header, par.is_fastq());
        Self::new(header, par.sequence, par.quality)
            .map_err(|e| FastxError::fmt_err(e, par.span))
    }

    pub fn header(&self) -> &str {
        &self.header
    }
    pub fn sequence(&self) -> &str {
        &self.sequence
    }
    pub fn quality(&self) -> &Quality {
        &self.quality
    }
    /// Phred scores, absent for FASTA reads.
    pub fn qscore(&self) -> Option<&[u8]> {
        self.quality.scores()
    }
    /// Mean Phred score, absent for FASTA reads.
    pub fn qscore_mean(&self) -> Option<f64> {
        self.quality.mean()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    pub fn n_count(&self) -> usize {
        self.n_count
    }
    pub fn gc_proportion(&self) -> f64 {
        self.gc_proportion
    }

    /// Copy with every base scoring below `min_qscore` replaced by `N`.
    ///
    /// Returns the copy and the number of bases that changed. Length, quality
    /// and composition statistics are carried over unchanged; `n_count` is
    /// left stale until [`Record::with_recounted_n`].
    pub(crate) fn masked(&self, min_qscore: u8) -> (Self, usize) {
        let Some(scores) = self.qscore() else {
            return (self.clone(), 0);
        };
        let mut changed = 0;
        let sequence = self
            .sequence
            .chars()
            .zip(scores)
            .map(|(base, &q)| {
                if q >= min_qscore {
                    base
                } else {
                    if base != 'N' {
                        changed += 1;
                    }
                    'N'
                }
            })
            .collect();
        (
            Self {
                sequence,
                ..self.clone()
            },
            changed,
        )
    }

    pub(crate) fn with_recounted_n(mut self) -> Self {
        self.n_count = count_n(&self.sequence);
        self
    }
}

fn count_n(sequence: &str) -> usize {
    sequence.chars().filter(|&b| b == 'N').count()
}

/// Strip the `>`/`@` marker; FASTQ headers are also cut at the first whitespace.
pub fn normalize_header(raw: &str, fastq: bool) -> &str {
    let header = raw
        .strip_prefix('>')
        .or_else(|| raw.strip_prefix('@'))
        .unwrap_or(raw);
    if fastq {
        header.split(char::is_whitespace).next().unwrap_or(header)
    } else {
        header
    }
}
