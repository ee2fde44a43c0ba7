//! Read-only lookups over a [`RecordSet`]. Results keep file order.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::FastxError;
use crate::record::Record;
use crate::record_set::RecordSet;

/// Comparison applied to read length by [`by_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthOp {
    Eq,
    Gt,
    Lt,
    Ne,
}

impl LengthOp {
    #[inline]
    pub fn matches(self, length: usize, target: usize) -> bool {
        match self {
            LengthOp::Eq => length == target,
            LengthOp::Gt => length > target,
            LengthOp::Lt => length < target,
            LengthOp::Ne => length != target,
        }
    }
}

impl FromStr for LengthOp {
    type Err = FastxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(LengthOp::Eq),
            ">" => Ok(LengthOp::Gt),
            "<" => Ok(LengthOp::Lt),
            "!=" => Ok(LengthOp::Ne),
            other => Err(FastxError::InvalidComparator(other.to_owned())),
        }
    }
}

impl fmt::Display for LengthOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthOp::Eq => "=",
            LengthOp::Gt => ">",
            LengthOp::Lt => "<",
            LengthOp::Ne => "!=",
        })
    }
}

/// Sequences of every record whose header is exactly `header`.
pub fn by_header<'a>(set: &'a RecordSet, header: &str) -> Vec<&'a str> {
    set.iter()
        .filter(|r| r.header() == header)
        .map(Record::sequence)
        .collect()
}

/// `(header, sequence)` of every record whose length satisfies `op` against `length`.
pub fn by_length(set: &RecordSet, length: usize, op: LengthOp) -> Vec<(&str, &str)> {
    set.iter()
        .filter(|r| op.matches(r.len(), length))
        .map(|r| (r.header(), r.sequence()))
        .collect()
}

/// Records whose sequence matches `pattern` anywhere.
pub fn by_pattern<'a>(set: &'a RecordSet, pattern: &Regex) -> Vec<&'a Record> {
    set.iter().filter(|r| pattern.is_match(r.sequence())).collect()
}

/// Like [`by_pattern`], compiling `pattern` first.
pub fn by_pattern_str<'a>(
    set: &'a RecordSet,
    pattern: &str,
) -> Result<Vec<&'a Record>, FastxError> {
    let re = Regex::new(pattern)?;
    Ok(by_pattern(set, &re))
}

/// Records whose sequence contains `needle` literally.
pub fn by_substring<'a>(set: &'a RecordSet, needle: &str) -> Vec<&'a Record> {
    set.iter().filter(|r| r.sequence().contains(needle)).collect()
}
