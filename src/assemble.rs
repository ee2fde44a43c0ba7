//! Grouping of classified lines into per-read paragraphs.
//!
//! Each sequence line opens a paragraph that starts one line earlier (its
//! header) and runs up to the line before the next sequence line. Two-line
//! paragraphs are FASTA reads, four-line paragraphs are FASTQ reads.

use crate::error::{FastxError, FormatError, LineSpan};
use crate::policy::{ClassifierMode, ParagraphPolicy, ParseOptions};

/// One read's worth of raw lines, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub span: LineSpan,
    pub header: &'a str,
    pub sequence: &'a str,
    /// `None` for FASTA paragraphs.
    pub quality: Option<&'a str>,
}

impl Paragraph<'_> {
    #[inline]
    pub fn is_fastq(&self) -> bool {
        self.quality.is_some()
    }
}

/// Split `lines` into paragraphs using the per-line sequence flags.
///
/// `flags` must have one entry per line (see [`crate::classify::classify_lines`]).
pub fn assemble<'a, S: AsRef<str>>(
    lines: &'a [S],
    flags: &[bool],
    opts: &ParseOptions,
) -> Result<Vec<Paragraph<'a>>, FastxError> {
    debug_assert_eq!(lines.len(), flags.len());
    let n = lines.len();

    let mut seq_idx: Vec<usize> = flags
        .iter()
        .enumerate()
        .filter_map(|(i, &is_seq)| is_seq.then_some(i))
        .collect();

    if seq_idx.is_empty() {
        if n > 0 {
            orphans(0, n, opts.paragraphs)?;
        }
        return Ok(Vec::new());
    }

    if seq_idx[0] == 0 {
        return Err(FastxError::fmt_err(
            FormatError::MissingHeader,
            LineSpan::from_window(0, 1),
        ));
    }
    if seq_idx[0] > 1 {
        orphans(0, seq_idx[0] - 1, opts.paragraphs)?;
    }

    // sentinel: the window of the last sequence line runs to the end of input
    seq_idx.push(n + 1);

    let mut out = Vec::with_capacity(seq_idx.len() - 1);
    for pair in seq_idx.windows(2) {
        let (from, to) = (pair[0] - 1, pair[1] - 1);
        let span = LineSpan::from_window(from, to);
        let window: &'a [S] = &lines[from..to];

        let par = match window.len() {
            2 => Paragraph {
                span,
                header: window[0].as_ref(),
                sequence: window[1].as_ref(),
                quality: None,
            },
            4 => {
                if opts.classifier == ClassifierMode::Marker
                    && !window[2].as_ref().starts_with('+')
                {
                    return Err(FastxError::fmt_err(
                        FormatError::MissingSeparator,
                        LineSpan::from_window(from + 2, from + 3),
                    ));
                }
                Paragraph {
                    span,
                    header: window[0].as_ref(),
                    sequence: window[1].as_ref(),
                    quality: Some(window[3].as_ref()),
                }
            }
            len if len >= 3 && opts.paragraphs == ParagraphPolicy::CoerceToFasta => {
                log::warn!("coercing {len}-line paragraph at {span} into a FASTA record");
                Paragraph {
                    span,
                    header: window[0].as_ref(),
                    sequence: window[1].as_ref(),
                    quality: None,
                }
            }
            len => {
                return Err(FastxError::fmt_err(
                    FormatError::MalformedParagraph { len },
                    span,
                ));
            }
        };
        out.push(par);
    }

    Ok(out)
}

fn orphans(from: usize, to: usize, policy: ParagraphPolicy) -> Result<(), FastxError> {
    let span = LineSpan::from_window(from, to);
    match policy {
        ParagraphPolicy::Strict => Err(FastxError::fmt_err(FormatError::OrphanLines, span)),
        ParagraphPolicy::CoerceToFasta => {
            log::warn!("dropping {span}: no sequence line follows them");
            Ok(())
        }
    }
}
