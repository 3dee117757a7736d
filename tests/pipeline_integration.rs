use lexreport::{
    analyze_paragraphs, generate_report, LexreportConfig, ParagraphCount, PipelineError,
    StaticSource,
};
use lopdf::Document;

const MEAT: [&str; 3] = [
    "Bacon ipsum dolor amet pork belly bacon jowl, pork loin ham hock.",
    "Beef ribs bacon pork chop turducken. Filet mignon bacon brisket!",
    "Short ribs pork belly bacon, ham hock pork loin.",
];

#[tokio::test]
async fn generate_report_integration() -> Result<(), PipelineError> {
    let cfg = LexreportConfig::default();
    let source = StaticSource::new(MEAT);
    let count = ParagraphCount::new(3, cfg.corpus.max_paragraphs)?;

    let document = generate_report(&source, count, &cfg).await?;

    assert!(document.as_bytes().starts_with(b"%PDF-1.5"));
    assert_eq!(source.calls(), 1, "corpus should be fetched exactly once");

    let parsed = Document::load_mem(document.as_bytes()).expect("valid pdf");
    assert_eq!(
        parsed.get_pages().len(),
        document.page_count(),
        "page count should match the parsed document"
    );
    Ok(())
}

#[test]
fn distributions_follow_token_counts() -> Result<(), PipelineError> {
    let dists = analyze_paragraphs(&MEAT, &LexreportConfig::default())?;
    let n = dists.token_count();

    assert_eq!(dists.bigrams.total(), n - 1);
    assert_eq!(dists.trigrams.total(), n - 2);
    assert_eq!(dists.lengths.total(), n);
    assert_eq!(dists.words.count("bacon"), 5);
    assert_eq!(dists.words.count("pork"), 5);
    // Tied with pork; first seen wins.
    assert_eq!(dists.words.most_common(1)[0].key, "bacon");
    Ok(())
}

#[test]
fn bigrams_span_paragraph_boundaries() -> Result<(), PipelineError> {
    let dists = analyze_paragraphs(&["bacon bacon", "pork."], &LexreportConfig::default())?;

    assert_eq!(dists.words.count("bacon"), 2);
    assert_eq!(dists.words.count("pork"), 1);
    assert_eq!(
        dists.bigrams.count(&["bacon".to_string(), "pork".to_string()]),
        1
    );
    assert_eq!(
        dists
            .trigrams
            .count(&["bacon".to_string(), "bacon".to_string(), "pork".to_string()]),
        1
    );
    Ok(())
}
