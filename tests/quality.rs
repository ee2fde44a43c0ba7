use fastx_records::quality::{MAX_QSCORE, decode, mean};
use fastx_records::record::normalize_header;
use fastx_records::{FormatError, Quality, QualityData, Record};

#[test]
fn decode_phred33() {
    assert_eq!(decode("!").unwrap(), [0]);
    assert_eq!(decode("!+5?I~").unwrap(), [0, 10, 20, 30, 40, MAX_QSCORE]);
    assert_eq!(MAX_QSCORE, 93);
    assert!(decode("").unwrap().is_empty());
}

#[test]
fn decode_rejects_unprintable_and_non_ascii() {
    assert_eq!(
        decode("II\x7f").unwrap_err(),
        FormatError::InvalidQualitySymbol { symbol: '\x7f', pos: 2 }
    );
    assert_eq!(
        decode("é").unwrap_err(),
        FormatError::InvalidQualitySymbol { symbol: 'é', pos: 0 }
    );
}

#[test]
fn mean_of_scores() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[10, 20, 30]), Some(20.0));
    assert_eq!(mean(&[93]), Some(93.0));
}

#[test]
fn quality_data_keeps_symbols_and_scores_together() {
    let q = QualityData::decode("5I").unwrap();
    assert_eq!(q.symbols(), "5I");
    assert_eq!(q.scores(), [20, 40]);
    assert_eq!(q.mean(), 30.0);
    assert_eq!(q.len(), 2);

    let present = Quality::Present(q);
    assert!(present.is_present());
    assert_eq!(present.mean(), Some(30.0));
    assert_eq!(Quality::Absent.mean(), None);
    assert_eq!(Quality::Absent.scores(), None);
}

#[test]
fn record_statistics() {
    let r = Record::new("r", "GGCCNNAT", Some("IIII!!II")).unwrap();
    assert_eq!(r.len(), 8);
    assert_eq!(r.n_count(), 2);
    assert_eq!(r.gc_proportion(), 0.5);
    assert_eq!(r.qscore_mean(), Some(30.0));

    let r = Record::new("r", "ATAT", None).unwrap();
    assert_eq!(r.gc_proportion(), 0.0);
    assert_eq!(r.qscore_mean(), None);
}

#[test]
fn record_rejects_empty_sequence() {
    assert_eq!(Record::new("r", "", None).unwrap_err(), FormatError::EmptySequence);
    assert_eq!(Record::new("r", "", Some("")).unwrap_err(), FormatError::EmptySequence);
}

#[test]
fn record_rejects_empty_quality_for_non_empty_sequence() {
    assert_eq!(
        Record::new("r", "ACGT", Some("")).unwrap_err(),
        FormatError::LengthMismatch { seq: 4, qual: 0 }
    );
}

#[test]
fn header_normalization() {
    assert_eq!(normalize_header("@r1 extra", true), "r1");
    assert_eq!(normalize_header("@r1\tx", true), "r1");
    assert_eq!(normalize_header(">r1 extra", false), "r1 extra");
    assert_eq!(normalize_header("r1", false), "r1");
    assert_eq!(normalize_header("@", true), "");
}
