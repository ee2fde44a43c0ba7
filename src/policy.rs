/// How sequence lines are told apart from header/separator/quality lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierMode {
    /// Follow `>` / `@` header markers (FASTA consumes 2 lines, FASTQ 4).
    #[default]
    Marker,
    /// A line is a sequence line iff every character is one of `ATGCN`.
    /// Headers or quality lines made only of those characters are
    /// misclassified; kept for compatibility with marker-less inputs.
    Alphabet,
}

/// What to do with paragraphs that are neither 2 nor 4 lines long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphPolicy {
    /// Abort the parse with the offending line range.
    #[default]
    Strict,
    /// Treat the first two lines as a FASTA record and drop the rest.
    /// Lines before the first record are dropped as well.
    CoerceToFasta,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub classifier: ClassifierMode,
    pub paragraphs: ParagraphPolicy,
}

impl ParseOptions {
    /// Alphabet classification with FASTA coercion of odd-sized paragraphs.
    pub fn compat() -> Self {
        Self {
            classifier: ClassifierMode::Alphabet,
            paragraphs: ParagraphPolicy::CoerceToFasta,
        }
    }
}
