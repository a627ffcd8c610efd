//! Yes/no question answering by predicate word overlap.
//!
//! A question is reduced to a triple, its predicate split into words and
//! stripped of filler words. Every stored fact about the question's subject
//! is then scored by counting normalized word matches against the fact's
//! predicate. The first fact whose own score reaches the threshold answers
//! "yes"; scores are never carried from one fact to the next.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::QuestionError;
use crate::extraction::TripleExtractor;
use crate::lexicon::Lexicon;
use crate::parser::ConstituencyParser;
use crate::store::FactStore;
use crate::triple::Triple;

/// A word boundary in a question predicate: letter or digit, optional
/// `,;:`, then a space.
#[allow(clippy::expect_used)]
static QUESTION_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9][,;:]? ").expect("static regex is valid"));

#[allow(clippy::expect_used)]
static PUNCTUATED_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;:]? ").expect("static regex is valid"));

#[allow(clippy::expect_used)]
static FACT_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;:]* ").expect("static regex is valid"));

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Yes,
    No,
    Unknown,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unknown => "I don't know",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many matching words a fact needs, given the question's word count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdRule {
    /// `round(words * ratio)`.
    Ratio { ratio: f64 },
    /// `words / 2`, rounded down.
    Half,
}

impl Default for ThresholdRule {
    fn default() -> Self {
        Self::Ratio { ratio: 0.75 }
    }
}

impl ThresholdRule {
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn needed_score(&self, words: usize) -> usize {
        match self {
            Self::Ratio { ratio } => (words as f64 * ratio).round().max(0.0) as usize,
            Self::Half => words / 2,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub threshold: ThresholdRule,
}

/// Split a question predicate into words, dropping at most one `,;:` and
/// the space after each word.
#[must_use]
pub fn question_words(predicate: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut start = 0;

    for boundary in QUESTION_BOUNDARY.find_iter(predicate) {
        words.push(&predicate[start..boundary.end()]);
        start = boundary.end();
    }
    words.push(&predicate[start..]);

    words
        .into_iter()
        .map(|word| PUNCTUATED_SPACE.replace_all(word, "").into_owned())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split a stored predicate on runs of `,;:` followed by a space.
#[must_use]
pub fn fact_words(predicate: &str) -> Vec<&str> {
    FACT_SEPARATOR
        .split(predicate)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Scores questions against a fact store.
pub struct QuestionMatcher<'a, P> {
    extractor: &'a TripleExtractor<P>,
    store: &'a FactStore,
    config: MatcherConfig,
}

impl<'a, P> QuestionMatcher<'a, P>
where
    P: ConstituencyParser,
{
    #[must_use]
    pub const fn new(
        extractor: &'a TripleExtractor<P>,
        store: &'a FactStore,
        config: MatcherConfig,
    ) -> Self {
        Self {
            extractor,
            store,
            config,
        }
    }

    fn lexicon(&self) -> &Lexicon {
        self.extractor.lexicon()
    }

    /// Answer a question, turning every failure into "I don't know".
    pub async fn answer(&self, question: &str) -> Verdict {
        match self.assess(question).await {
            Ok(verdict) => verdict,
            Err(e) => {
                debug!("Cannot answer {question:?}: {e}");
                Verdict::Unknown
            }
        }
    }

    /// Parse and score a question.
    ///
    /// # Errors
    /// `Unparseable` when the question has no predicate or cannot be parsed,
    /// `UnknownSubject` when nothing is known about its subject.
    pub async fn assess(&self, question: &str) -> Result<Verdict, QuestionError> {
        let triple = match self.extractor.process_sentence(question).await {
            Ok(triple) => triple,
            Err(e) => {
                warn!("Parser failed on question {question:?}: {e}");
                return Err(QuestionError::Unparseable);
            }
        };
        self.assess_triple(&triple)
    }

    /// Score an already extracted question triple.
    ///
    /// # Errors
    /// See [`Self::assess`].
    pub fn assess_triple(&self, question: &Triple) -> Result<Verdict, QuestionError> {
        let predicate = question
            .predicate
            .as_deref()
            .ok_or(QuestionError::Unparseable)?;

        let lexicon = self.lexicon();
        let words: Vec<String> = question_words(predicate)
            .into_iter()
            .filter(|word| !lexicon.is_filler(word))
            .collect();
        let needed = self.config.threshold.needed_score(words.len());
        let words: Vec<String> = words.iter().map(|w| self.normalize(w)).collect();

        let subject = question
            .subject
            .as_deref()
            .map(|s| lexicon.resolve_synonym(s))
            .ok_or_else(|| QuestionError::UnknownSubject(String::new()))?;
        let facts = self
            .store
            .facts_for(&subject)
            .ok_or_else(|| QuestionError::UnknownSubject(subject.clone()))?;

        debug!(
            "Question words {:?} for subject {subject:?}, need {needed}",
            words
        );

        for fact in facts {
            let Some(fact_predicate) = fact.predicate.as_deref() else {
                continue;
            };
            let fact_words: Vec<String> = fact_words(fact_predicate)
                .into_iter()
                .map(|w| self.normalize(w))
                .collect();

            let mut score = 0;
            for word in &words {
                for fact_word in &fact_words {
                    if word == fact_word {
                        score += 1;
                        if score >= needed {
                            debug!("Matched fact {fact} with score {score}");
                            return Ok(Verdict::Yes);
                        }
                    }
                }
            }
        }

        Ok(Verdict::No)
    }

    /// Stem, then resolve synonyms, then fold case.
    fn normalize(&self, word: &str) -> String {
        let lexicon = self.lexicon();
        lexicon
            .resolve_synonym(&lexicon.stem(word))
            .to_lowercase()
    }
}
