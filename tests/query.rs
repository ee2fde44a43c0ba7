use fastx_records::query::{by_header, by_length, by_pattern, by_pattern_str, by_substring};
use fastx_records::{FastxError, LengthOp, ParseOptions, RecordSet};
use regex::Regex;

fn sample() -> RecordSet {
    let lines = [
        ">r1", "ACGT",
        ">r2", "GGGGCCCC",
        ">R1", "TTTT",
        ">r1", "AAAAAAAAAA",
        "@q1", "GGATCC", "+", "IIIIII",
    ];
    RecordSet::from_lines(&lines, &ParseOptions::default()).unwrap()
}

#[test]
fn header_lookup_is_exact_and_returns_every_match() {
    let set = sample();
    assert_eq!(by_header(&set, "r1"), ["ACGT", "AAAAAAAAAA"]);
    assert_eq!(by_header(&set, "R1"), ["TTTT"]);
    assert_eq!(by_header(&set, "q1"), ["GGATCC"]);
    assert!(by_header(&set, "r").is_empty());
}

#[test]
fn length_comparisons() {
    let set = sample();
    assert_eq!(by_length(&set, 4, LengthOp::Eq), [("r1", "ACGT"), ("R1", "TTTT")]);
    assert_eq!(
        by_length(&set, 6, LengthOp::Gt),
        [("r2", "GGGGCCCC"), ("r1", "AAAAAAAAAA")]
    );
    assert_eq!(by_length(&set, 6, LengthOp::Lt), [("r1", "ACGT"), ("R1", "TTTT")]);
    assert_eq!(by_length(&set, 4, LengthOp::Ne).len(), 3);
}

#[test]
fn gt_selects_exactly_the_longer_reads() {
    let set = sample();
    for cutoff in 0..12 {
        let expected: Vec<(&str, &str)> = set
            .iter()
            .filter(|r| r.len() > cutoff)
            .map(|r| (r.header(), r.sequence()))
            .collect();
        assert_eq!(by_length(&set, cutoff, LengthOp::Gt), expected);
    }
}

#[test]
fn comparator_tokens() {
    assert_eq!("=".parse::<LengthOp>().unwrap(), LengthOp::Eq);
    assert_eq!(">".parse::<LengthOp>().unwrap(), LengthOp::Gt);
    assert_eq!("<".parse::<LengthOp>().unwrap(), LengthOp::Lt);
    assert_eq!("!=".parse::<LengthOp>().unwrap(), LengthOp::Ne);
    assert_eq!(LengthOp::Ne.to_string(), "!=");

    match "=>".parse::<LengthOp>() {
        Err(FastxError::InvalidComparator(tok)) => assert_eq!(tok, "=>"),
        other => panic!("expected invalid comparator, got {other:?}"),
    }
}

#[test]
fn pattern_search_returns_full_records() {
    let set = sample();
    let re = Regex::new("^GG").unwrap();
    let hits = by_pattern(&set, &re);
    let headers: Vec<&str> = hits.iter().map(|r| r.header()).collect();
    assert_eq!(headers, ["r2", "q1"]);
    assert_eq!(hits[1].qscore_mean(), Some(40.0));

    let hits = by_pattern_str(&set, "A{5,}").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].len(), 10);

    assert!(matches!(
        by_pattern_str(&set, "(").unwrap_err(),
        FastxError::InvalidPattern(_)
    ));
}

#[test]
fn substring_search_is_literal() {
    let set = sample();
    assert_eq!(by_substring(&set, "GATC").len(), 1);
    assert!(by_substring(&set, "A.G").is_empty());
}
