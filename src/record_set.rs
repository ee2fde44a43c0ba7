use std::fmt;
use std::ops::Index;

use crate::assemble::assemble;
use crate::classify::classify_lines;
use crate::error::FastxError;
use crate::policy::ParseOptions;
use crate::record::Record;

/// Records in file order. Positions are 1-based in diagnostics only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Classify, assemble and build every record from raw lines
    /// (line terminators already stripped).
    ///
    /// The first structural or record error aborts the whole parse.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        opts: &ParseOptions,
    ) -> Result<Self, FastxError> {
        let flags = classify_lines(lines, opts.classifier);
        let paragraphs = assemble(lines, &flags, opts)?;
        let records = paragraphs
            .iter()
            .map(Record::from_paragraph)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "built {} records from {} lines ({} FASTQ)",
            records.len(),
            lines.len(),
            paragraphs.iter().filter(|p| p.is_fastq()).count()
        );
        Ok(Self { records })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at 1-based `position`, as reported in diagnostics.
    pub fn get(&self, position: usize) -> Option<&Record> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn mean_length(&self) -> Option<f64> {
        mean(self.records.iter().map(|r| r.len() as f64))
    }

    /// Median read length; the mean of the two middle lengths for even counts.
    pub fn median_length(&self) -> Option<f64> {
        let mut lengths: Vec<usize> = self.records.iter().map(Record::len).collect();
        if lengths.is_empty() {
            return None;
        }
        lengths.sort_unstable();
        let mid = lengths.len() / 2;
        Some(if lengths.len() % 2 == 0 {
            (lengths[mid - 1] + lengths[mid]) as f64 / 2.0
        } else {
            lengths[mid] as f64
        })
    }

    /// Mean of the per-read mean Phred scores over reads that have quality.
    pub fn mean_qscore(&self) -> Option<f64> {
        mean(self.records.iter().filter_map(Record::qscore_mean))
    }

    pub fn mean_n_count(&self) -> Option<f64> {
        mean(self.records.iter().map(|r| r.n_count() as f64))
    }

    pub fn mean_gc_proportion(&self) -> Option<f64> {
        mean(self.records.iter().map(Record::gc_proportion))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            reads: self.len(),
            mean_qscore: self.mean_qscore(),
            mean_length: self.mean_length(),
            median_length: self.median_length(),
            mean_n_count: self.mean_n_count(),
            mean_gc_proportion: self.mean_gc_proportion(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (n, sum) = values.fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + v));
    (n > 0).then(|| sum / n as f64)
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Index<usize> for RecordSet {
    type Output = Record;
    fn index(&self, i: usize) -> &Record {
        &self.records[i]
    }
}

/// Aggregate statistics handed to reporting code.
///
/// Every mean is `None` for an empty set; `mean_qscore` is also `None` when
/// no read carries quality (FASTA input).
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub reads: usize,
    pub mean_qscore: Option<f64>,
    pub mean_length: Option<f64>,
    pub median_length: Option<f64>,
    pub mean_n_count: Option<f64>,
    pub mean_gc_proportion: Option<f64>,
}

struct Opt(Option<f64>);

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of reads: {}", self.reads)?;
        writeln!(f, "Average Q-score: {}", Opt(self.mean_qscore))?;
        writeln!(f, "Average sequence length: {}", Opt(self.mean_length))?;
        writeln!(f, "Median sequence length: {}", Opt(self.median_length))?;
        writeln!(f, "Average N count: {}", Opt(self.mean_n_count))?;
        write!(f, "Average GC proportion: {}", Opt(self.mean_gc_proportion))
    }
}
