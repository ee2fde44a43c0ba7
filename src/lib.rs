//! FASTA/FASTQ record model with per-read statistics.
//!
//! - Lines are classified as sequence lines (by `>`/`@` markers, or by the
//!   `ATGCN` alphabet in compatibility mode) and grouped into 2-line FASTA
//!   or 4-line FASTQ paragraphs.
//! - Each paragraph becomes an immutable [`Record`] with length, N count,
//!   GC proportion and, for FASTQ, decoded Phred+33 scores and their mean.
//! - [`query`] offers read-only lookups; [`qc`] masks and filters into a new
//!   [`RecordSet`].
//! - [`loader`] reads `.fa`/`.fasta`/`.fq`/`.fastq` files; optional `mmap`
//!   for plain files and an async loader behind the `async` feature.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod loader;
pub mod policy;
pub mod qc;
pub mod quality;
pub mod query;
pub mod record;
pub mod record_set;

#[cfg(feature = "async")]
pub mod async_loader;

pub use crate::assemble::Paragraph;
pub use crate::error::{FastxError, FormatError, LineSpan};
pub use crate::loader::{is_supported_path, load_bufread, load_path};
pub use crate::policy::{ClassifierMode, ParagraphPolicy, ParseOptions};
pub use crate::qc::{QcConfig, QcReport, QualityControl};
pub use crate::quality::{Quality, QualityData};
pub use crate::query::LengthOp;
pub use crate::record::Record;
pub use crate::record_set::{RecordSet, Summary};

#[cfg(feature = "async")]
pub use crate::async_loader::{load_async_bufread, load_path_async};
