//! Line classification: which lines carry bases.

use crate::policy::ClassifierMode;

/// Bases accepted by the alphabet classifier.
pub const BASE_ALPHABET: [char; 5] = ['A', 'T', 'G', 'C', 'N'];

/// True iff every character of `line` is in [`BASE_ALPHABET`].
///
/// No `>`/`@`/`+` prefix is consulted. An empty line is vacuously a
/// sequence line, so blank records surface later as empty sequences.
#[inline]
pub fn is_sequence_line(line: &str) -> bool {
    line.chars().all(|c| BASE_ALPHABET.contains(&c))
}

/// Classify every line of the input according to `mode`.
pub fn classify_lines<S: AsRef<str>>(lines: &[S], mode: ClassifierMode) -> Vec<bool> {
    match mode {
        ClassifierMode::Alphabet => lines.iter().map(|l| is_sequence_line(l.as_ref())).collect(),
        ClassifierMode::Marker => classify_by_marker(lines),
    }
}

fn classify_by_marker<S: AsRef<str>>(lines: &[S]) -> Vec<bool> {
    let mut flags = vec![false; lines.len()];
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();
        let step = if line.starts_with('>') {
            2
        } else if line.starts_with('@') {
            4
        } else {
            1
        };
        if step > 1 && i + 1 < lines.len() {
            flags[i + 1] = true;
        }
        i += step;
    }
    flags
}
