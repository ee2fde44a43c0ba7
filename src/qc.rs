//! Quality-control pipeline.
//!
//! Stages, in order:
//! 1. drop reads containing any configured adapter,
//! 2. mask bases scoring below `min_qscore` with `N`,
//! 3. keep reads longer than `min_length`,
//! 4. keep reads whose mean score is above `av_qscore_min` (reads without
//!    quality bypass this stage),
//! 5. recount `N`s in the surviving sequences.
//!
//! The input set is never modified; a new set is returned.

use std::fmt;

use crate::record::Record;
use crate::record_set::RecordSet;

/// Illumina adapter prefixes screened by default.
pub const DEFAULT_ADAPTERS: [&str; 3] = ["AGATCGGAAGAGC", "TGGAATTCTCGG", "CTGTCTCTTATA"];

#[derive(Debug, Clone, PartialEq)]
pub struct QcConfig {
    /// Reads must be strictly longer than this.
    pub min_length: usize,
    /// Mean Phred score must be strictly above this.
    pub av_qscore_min: f64,
    /// Bases scoring below this are masked.
    pub min_qscore: u8,
    /// Exact, case-sensitive substrings that disqualify a read. Empty
    /// entries are ignored.
    pub adapter_list: Vec<String>,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            min_length: 80,
            av_qscore_min: 30.0,
            min_qscore: 30,
            adapter_list: DEFAULT_ADAPTERS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Per-stage counts of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QcReport {
    pub reads_input: usize,
    pub reads_failed_adapter: usize,
    pub bases_masked: usize,
    pub reads_failed_length: usize,
    pub reads_failed_quality: usize,
    /// Reads without quality that skipped the mean-quality stage.
    pub reads_without_quality: usize,
    pub reads_passed: usize,
}

impl fmt::Display for QcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in, {} adapter, {} masked bases, {} too short, {} low quality, {} without quality, {} passed",
            self.reads_input,
            self.reads_failed_adapter,
            self.bases_masked,
            self.reads_failed_length,
            self.reads_failed_quality,
            self.reads_without_quality,
            self.reads_passed
        )
    }
}

/// Stateless runner over a [`QcConfig`].
#[derive(Debug, Clone, Default)]
pub struct QualityControl {
    config: QcConfig,
}

impl QualityControl {
    pub fn new(config: QcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QcConfig {
        &self.config
    }

    pub fn run(&self, input: &RecordSet) -> RecordSet {
        self.run_with_report(input).0
    }

    pub fn run_with_report(&self, input: &RecordSet) -> (RecordSet, QcReport) {
        let cfg = &self.config;
        let mut report = QcReport {
            reads_input: input.len(),
            ..QcReport::default()
        };

        let screened: Vec<&Record> = input.iter().filter(|r| !has_adapter(r, cfg)).collect();
        report.reads_failed_adapter = input.len() - screened.len();
        log::debug!("adapter screening dropped {} reads", report.reads_failed_adapter);

        let masked: Vec<Record> = screened
            .into_iter()
            .map(|r| {
                let (rec, changed) = r.masked(cfg.min_qscore);
                report.bases_masked += changed;
                rec
            })
            .collect();
        log::debug!("masked {} bases below Q{}", report.bases_masked, cfg.min_qscore);

        let before = masked.len();
        let long_enough: Vec<Record> = masked
            .into_iter()
            .filter(|r| r.len() > cfg.min_length)
            .collect();
        report.reads_failed_length = before - long_enough.len();
        log::debug!(
            "length filter (> {}) dropped {} reads",
            cfg.min_length,
            report.reads_failed_length
        );

        let before = long_enough.len();
        let mut without_quality = 0;
        let good: Vec<Record> = long_enough
            .into_iter()
            .filter(|r| match r.qscore_mean() {
                Some(m) => m > cfg.av_qscore_min,
                None => {
                    without_quality += 1;
                    true
                }
            })
            .collect();
        report.reads_without_quality = without_quality;
        report.reads_failed_quality = before - good.len();
        log::debug!(
            "mean quality filter (> {}) dropped {} reads, {} reads had no quality",
            cfg.av_qscore_min,
            report.reads_failed_quality,
            report.reads_without_quality
        );

        let out: RecordSet = good.into_iter().map(Record::with_recounted_n).collect();
        report.reads_passed = out.len();
        log::info!("quality control: {report}");

        (out, report)
    }
}

fn has_adapter(read: &Record, cfg: &QcConfig) -> bool {
    cfg.adapter_list
        .iter()
        .any(|adapter| !adapter.is_empty() && read.sequence().contains(adapter.as_str()))
}

/// Run the pipeline with `config` over `input`.
pub fn quality_check(input: &RecordSet, config: &QcConfig) -> RecordSet {
    QualityControl::new(config.clone()).run(input)
}
