//! Lexical normalization: synonym resolution, filler words and stemming.
//!
//! A [`Lexicon`] is built once from a [`LexiconConfig`] and only read
//! afterwards. Every table entry is stored lower-cased so lookups are
//! case-insensitive.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Suffixes in priority order. The first match wins, not the longest.
const SUFFIXES: &[&str] = &[
    "able", "ible", "al", "ial", "ed", "en", "er", "est", "ful", "ic", "ing", "ion", "tion",
    "ation", "ition", "ity", "ty", "ive", "ative", "itive", "less", "ly", "ment", "ness", "ous",
    "eous", "ious", "s", "es", "y",
];

/// Prefixes in priority order.
const PREFIXES: &[&str] = &[
    "anti", "de", "dis", "en", "em", "fore", "in", "im", "il", "ir", "inter", "mid", "mis", "non",
    "over", "pre", "re", "semi", "sub", "super", "trans", "un", "under",
];

/// How the suffix step of [`Lexicon::stem`] rewrites a word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StemMode {
    /// Keep only the trailing suffix-length part of the word.
    ///
    /// This reproduces the answers of existing deployments: "killed" and
    /// "called" both reduce to "ed".
    #[default]
    Historical,
    /// Remove the suffix and keep the rest of the word.
    Strip,
}

impl StemMode {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Historical => "historical",
            Self::Strip => "strip",
        }
    }
}

/// Serializable lexicon tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Surface form to canonical form.
    #[serde(default = "default_synonyms")]
    pub synonyms: HashMap<String, String>,

    /// Words excluded from predicate scoring.
    #[serde(default = "default_filler_words")]
    pub filler_words: Vec<String>,

    #[serde(default)]
    pub stem_mode: StemMode,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            synonyms: default_synonyms(),
            filler_words: default_filler_words(),
            stem_mode: StemMode::default(),
        }
    }
}

/// Default synonym table for the Lincoln corpus.
#[must_use]
pub fn default_synonyms() -> HashMap<String, String> {
    [
        ("abraham lincoln", "lincoln"),
        ("abraham", "lincoln"),
        ("he", "lincoln"),
        ("assassinated", "killed"),
    ]
    .into_iter()
    .map(|(from, to)| (from.to_string(), to.to_string()))
    .collect()
}

/// Default filler words.
#[must_use]
pub fn default_filler_words() -> Vec<String> {
    ["the", "is", "was", "a", "in", "are", "it's", "an", "and", "for"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Synonym table, filler-word set and stemming rules.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synonyms: HashMap<String, String>,
    filler_words: HashSet<String>,
    stem_mode: StemMode,
}

impl Lexicon {
    /// Build a lexicon, lower-casing every table entry.
    #[must_use]
    pub fn new<S, F>(synonyms: S, filler_words: F) -> Self
    where
        S: IntoIterator<Item = (String, String)>,
        F: IntoIterator<Item = String>,
    {
        Self {
            synonyms: synonyms
                .into_iter()
                .map(|(from, to)| (from.to_lowercase(), to.to_lowercase()))
                .collect(),
            filler_words: filler_words
                .into_iter()
                .map(|word| word.to_lowercase())
                .collect(),
            stem_mode: StemMode::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &LexiconConfig) -> Self {
        Self::new(config.synonyms.clone(), config.filler_words.clone())
            .with_stem_mode(config.stem_mode)
    }

    #[must_use]
    pub const fn with_stem_mode(mut self, stem_mode: StemMode) -> Self {
        self.stem_mode = stem_mode;
        self
    }

    #[must_use]
    pub const fn stem_mode(&self) -> StemMode {
        self.stem_mode
    }

    #[must_use]
    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.filler_words.len()
    }

    /// Lower-case `word` and map it to its canonical form when one is known.
    #[must_use]
    pub fn resolve_synonym(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match self.synonyms.get(&lower) {
            Some(canonical) => canonical.clone(),
            None => lower,
        }
    }

    /// Case-insensitive filler-word check.
    #[must_use]
    pub fn is_filler(&self, word: &str) -> bool {
        self.filler_words.contains(&word.to_lowercase())
    }

    /// Apply at most one suffix step and then at most one prefix step.
    ///
    /// An affix only applies to a word strictly longer than the affix. The
    /// prefix step drops the trailing prefix-length characters of whatever
    /// the suffix step produced.
    #[must_use]
    pub fn stem(&self, word: &str) -> String {
        let mut stem = word.to_string();

        if let Some(suffix) = SUFFIXES
            .iter()
            .find(|suffix| char_len(&stem) > suffix.len() && stem.ends_with(*suffix))
        {
            stem = match self.stem_mode {
                StemMode::Historical => (*suffix).to_string(),
                StemMode::Strip => stem[..stem.len() - suffix.len()].to_string(),
            };
        }

        if let Some(prefix) = PREFIXES
            .iter()
            .find(|prefix| char_len(&stem) > prefix.len() && stem.starts_with(*prefix))
        {
            let keep = char_len(&stem) - prefix.len();
            stem = stem.chars().take(keep).collect();
        }

        stem
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
