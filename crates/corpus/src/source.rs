use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{FetchError, ParagraphCount};

/// Paragraphs analyzed in one request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    paragraphs: Vec<String>,
}

impl Corpus {
    /// Returns `None` when there are no paragraphs.
    pub fn new(paragraphs: Vec<String>) -> Option<Self> {
        if paragraphs.is_empty() {
            None
        } else {
            Some(Self { paragraphs })
        }
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn into_paragraphs(self) -> Vec<String> {
        self.paragraphs
    }
}

/// Somewhere paragraphs of text can be fetched from.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Fetches up to `count` paragraphs, in source order.
    async fn fetch(&self, count: ParagraphCount) -> Result<Vec<String>, FetchError>;
}

/// A source serving a fixed list of paragraphs.
///
/// Used by the command line tool for local files and by tests. Each call
/// returns the first `count` paragraphs and is counted.
#[derive(Debug, Default)]
pub struct StaticSource {
    paragraphs: Vec<String>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Splits `text` into paragraphs at blank lines.
    pub fn from_text(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line.trim());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }
        Self::new(paragraphs)
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Number of `fetch` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CorpusSource for StaticSource {
    async fn fetch(&self, count: ParagraphCount) -> Result<Vec<String>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .paragraphs
            .iter()
            .take(count.get() as usize)
            .cloned()
            .collect())
    }
}
