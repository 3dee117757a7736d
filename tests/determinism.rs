use lexreport::{analyze_paragraphs, build_chart_svg, build_report, LexreportConfig};

const CORPUS: [&str; 2] = [
    "Pork chop filet mignon ribeye, shoulder bacon beef ribs. Ham hock sirloin meatball.",
    "Tenderloin bacon pig, beef ribs spare ribs. Pork loin ham hock flank!",
];

#[test]
fn reports_are_byte_identical_across_runs() {
    let cfg = LexreportConfig::default();

    let first = build_report(&CORPUS, &cfg).expect("first report");
    let second = build_report(&CORPUS, &cfg).expect("second report");

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn analysis_is_stable() {
    let cfg = LexreportConfig::default();
    let a = analyze_paragraphs(&CORPUS, &cfg).expect("analysis");
    let b = analyze_paragraphs(&CORPUS, &cfg).expect("analysis");

    assert_eq!(a, b);
    let top_a: Vec<_> = a.words.most_common(5).into_iter().map(|r| (r.key.clone(), r.count)).collect();
    let top_b: Vec<_> = b.words.most_common(5).into_iter().map(|r| (r.key.clone(), r.count)).collect();
    assert_eq!(top_a, top_b);
}

#[test]
fn svg_chart_is_stable() {
    let cfg = LexreportConfig::default();
    assert_eq!(
        build_chart_svg(&CORPUS, &cfg).expect("svg"),
        build_chart_svg(&CORPUS, &cfg).expect("svg")
    );
}

#[test]
fn case_and_punctuation_do_not_change_counts() {
    let cfg = LexreportConfig::default();
    let loud = analyze_paragraphs(&["BACON, Bacon! bacon..."], &cfg).expect("analysis");
    let quiet = analyze_paragraphs(&["bacon bacon bacon"], &cfg).expect("analysis");

    assert_eq!(loud, quiet);
}
