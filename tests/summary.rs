use fastx_records::{ParseOptions, RecordSet};

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn summary_of_fastq_reads() {
    let lines = [
        "@a", "ACGT", "+", "IIII",
        "@b", "GGGGCCCC", "+", "++++++++",
        "@c x", "NNNNNNNNNA", "+", "5555555555",
    ];
    let set = RecordSet::from_lines(&lines, &ParseOptions::default()).unwrap();
    let s = set.summary();
    assert_eq!(s.reads, 3);
    assert!(close(s.mean_length, 22.0 / 3.0));
    assert_eq!(s.median_length, Some(8.0));
    assert!(close(s.mean_qscore, 70.0 / 3.0));
    assert!(close(s.mean_n_count, 3.0));
    assert!(close(s.mean_gc_proportion, 0.5));
    assert_eq!(set[2].header(), "c");
}

#[test]
fn median_of_even_count_averages_middle_lengths() {
    let set = RecordSet::from_lines(
        &[">a", "A", ">b", "AAA", ">c", "AAAAAAAA", ">d", "AA"],
        &ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(set.median_length(), Some(2.5));
}

#[test]
fn fasta_only_has_no_mean_qscore() {
    let set = RecordSet::from_lines(&[">a", "ACGT", ">b", "GG"], &ParseOptions::default()).unwrap();
    let s = set.summary();
    assert_eq!(s.mean_qscore, None);
    assert_eq!(s.mean_length, Some(3.0));

    let text = s.to_string();
    assert!(text.contains("Number of reads: 2"));
    assert!(text.contains("Average Q-score: n/a"));
    assert!(text.contains("Average sequence length: 3.00"));
}

#[test]
fn mean_qscore_skips_reads_without_quality() {
    let lines = [">a", "ACGT", "@b", "ACGT", "+", "IIII", "@c", "AC", "+", "55"];
    let set = RecordSet::from_lines(&lines, &ParseOptions::default()).unwrap();
    assert_eq!(set.mean_qscore(), Some(30.0));
}

#[test]
fn empty_set_has_no_means() {
    let s = RecordSet::default().summary();
    assert_eq!(s.reads, 0);
    assert_eq!(s.mean_length, None);
    assert_eq!(s.median_length, None);
    assert_eq!(s.mean_qscore, None);
    assert_eq!(s.mean_n_count, None);
    assert_eq!(s.mean_gc_proportion, None);
}
