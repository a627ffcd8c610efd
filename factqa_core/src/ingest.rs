//! Corpus ingestion: sentence splitting and fact store construction.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::extraction::TripleExtractor;
use crate::parser::ConstituencyParser;
use crate::store::FactStore;

#[allow(clippy::expect_used)]
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9][.?]").expect("static regex is valid"));

/// Split a document into sentences.
///
/// Line breaks become spaces first; a sentence ends after a lower-case letter or
/// digit followed by `.` or `?`. Blank pieces are dropped.
#[must_use]
pub fn split_sentences(document: &str) -> Vec<String> {
    let joined = document.replace("\r\n", " ").replace(['\r', '\n'], " ");
    let mut sentences = Vec::new();
    let mut start = 0;

    for end in SENTENCE_END.find_iter(&joined) {
        sentences.push(&joined[start..end.end()]);
        start = end.end();
    }
    sentences.push(&joined[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Outcome of one ingestion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    total: usize,
    failed: usize,
}

impl IngestReport {
    /// # Errors
    /// `EmptyCorpus` when `total` is zero, `InvalidReport` when more
    /// sentences failed than were read.
    pub const fn new(total: usize, failed: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyCorpus);
        }
        if failed > total {
            return Err(Error::InvalidReport { total, failed });
        }
        Ok(Self { total, failed })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    #[must_use]
    pub const fn processed(&self) -> usize {
        self.total - self.failed
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        self.processed() as f64 * 100.0 / self.total as f64
    }
}

impl std::fmt::Display for IngestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Successfully processed {}/{} sentences ({:.1}%)",
            self.processed(),
            self.total,
            self.percentage()
        )
    }
}

/// Runs the extractor over a corpus and files the results.
pub struct CorpusBuilder<'a, P> {
    extractor: &'a TripleExtractor<P>,
}

impl<'a, P> CorpusBuilder<'a, P>
where
    P: ConstituencyParser,
{
    #[must_use]
    pub const fn new(extractor: &'a TripleExtractor<P>) -> Self {
        Self { extractor }
    }

    /// Split `document` into sentences and ingest them.
    pub async fn build_document(&self, document: &str) -> Result<(FactStore, IngestReport)> {
        let sentences = split_sentences(document);
        self.build(&sentences).await
    }

    /// Ingest sentences in order.
    ///
    /// A sentence that yields an empty triple, or that the parser rejects,
    /// counts as failed and is not stored.
    ///
    /// # Errors
    /// `EmptyCorpus` when `sentences` is empty.
    pub async fn build(&self, sentences: &[String]) -> Result<(FactStore, IngestReport)> {
        if sentences.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut store = FactStore::new();
        let mut failed = 0;

        for (i, sentence) in sentences.iter().enumerate() {
            let triple = match self.extractor.process_sentence(sentence).await {
                Ok(triple) => triple,
                Err(e) => {
                    warn!("Parser failed on sentence {}: {e}", i + 1);
                    failed += 1;
                    continue;
                }
            };

            if triple.is_empty() {
                debug!("No facts in sentence {}: {sentence:?}", i + 1);
                failed += 1;
                continue;
            }

            debug!("Sentence {} -> {triple}", i + 1);
            store.insert(triple);
        }

        let report = IngestReport::new(sentences.len(), failed)?;
        info!("{report}");
        Ok((store, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_after_terminal_punctuation() {
        let doc = "Lincoln was born in 1809. He was elected\npresident. Was he killed? yes";
        assert_eq!(
            split_sentences(doc),
            [
                "Lincoln was born in 1809.",
                "He was elected president.",
                "Was he killed?",
                "yes"
            ]
        );
    }

    #[test]
    fn splits_only_after_lowercase_or_digit() {
        assert_eq!(
            split_sentences("He met Gen. Lee at noon."),
            ["He met Gen.", "Lee at noon."]
        );
        assert_eq!(split_sentences("U.S. troops won."), ["U.S. troops won."]);
    }

    #[test]
    fn blank_document_has_no_sentences() {
        assert!(split_sentences(" \n\n ").is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn report_ratio() {
        let report = IngestReport::new(10, 3).expect("non-empty corpus");
        assert_eq!(report.processed(), 7);
        assert!((report.percentage() - 70.0).abs() < f64::EPSILON);
        assert_eq!(
            report.to_string(),
            "Successfully processed 7/10 sentences (70.0%)"
        );
    }

    #[test]
    fn empty_report_is_an_error() {
        assert!(matches!(IngestReport::new(0, 0), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn more_failures_than_sentences_is_rejected() {
        assert!(matches!(
            IngestReport::new(1, 2),
            Err(Error::InvalidReport {
                total: 1,
                failed: 2
            })
        ));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn every_sentence_failing_is_a_valid_report() {
        let report = IngestReport::new(2, 2).expect("failed equals total");
        assert_eq!(report.processed(), 0);
        assert_eq!(report.to_string(), "Successfully processed 0/2 sentences (0.0%)");
    }
}
