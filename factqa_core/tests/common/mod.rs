//! Canned parser for integration tests.

use async_trait::async_trait;
use factqa_core::lexicon::LexiconConfig;
use factqa_core::{ConstituencyParser, Lexicon, ParseTree, TripleExtractor};
use std::collections::HashMap;
use std::sync::Arc;

/// Returns pre-recorded bracketed parses keyed by sentence text.
#[derive(Default)]
pub struct CannedParser {
    parses: HashMap<String, String>,
}

impl CannedParser {
    pub fn with(mut self, text: &str, bracketed: &str) -> Self {
        self.parses.insert(text.to_string(), bracketed.to_string());
        self
    }
}

#[async_trait]
impl ConstituencyParser for CannedParser {
    async fn parse(&self, text: &str) -> anyhow::Result<Vec<ParseTree>> {
        let Some(bracketed) = self.parses.get(text) else {
            anyhow::bail!("no canned parse for {text:?}");
        };
        Ok(vec![ParseTree::from_bracketed(bracketed)?])
    }
}

pub fn default_lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_config(&LexiconConfig::default()))
}

pub fn extractor(parser: CannedParser) -> TripleExtractor<CannedParser> {
    TripleExtractor::new(parser, default_lexicon())
}

/// Parser that knows the Lincoln corpus and the questions asked about it.
pub fn lincoln_parser() -> CannedParser {
    CannedParser::default()
        .with(
            "Lincoln was killed by Booth.",
            "(ROOT (S (NP (NNP Lincoln)) (VP (VBD was) (VP (VBN killed) (PP (IN by) (NP (NNP Booth))))) (. .)))",
        )
        .with(
            "Abraham Lincoln won the war.",
            "(ROOT (S (NP (NNP Abraham) (NNP Lincoln)) (VP (VBD won) (NP (DT the) (NN war))) (. .)))",
        )
        .with(
            "He wrote the speech.",
            "(ROOT (S (NP (PRP He)) (VP (VBD wrote) (NP (DT the) (NN speech))) (. .)))",
        )
        .with(
            "Booth fled.",
            "(ROOT (S (NP (NNP Booth)) (VP (VBD fled)) (. .)))",
        )
        .with("Wow!", "(ROOT (FRAG (INTJ (UH Wow)) (. !)))")
        .with(
            "Was Lincoln killed?",
            "(ROOT (SQ (VBD Was) (NP (NNP Lincoln)) (VP (VBN killed)) (. ?)))",
        )
        .with(
            "Was Abraham Lincoln assassinated?",
            "(ROOT (SQ (VBD Was) (NP (NNP Abraham) (NNP Lincoln)) (VP (VBN assassinated)) (. ?)))",
        )
        .with(
            "Did Washington cross the Delaware?",
            "(ROOT (SQ (VBD Did) (NP (NNP Washington)) (VP (VB cross) (NP (DT the) (NNP Delaware))) (. ?)))",
        )
        .with(
            "Did Lincoln win the book?",
            "(ROOT (SQ (VBD Did) (NP (NNP Lincoln)) (VP (VB win) (NP (DT the) (NN book))) (. ?)))",
        )
        .with("Lincoln?", "(ROOT (NP (NNP Lincoln) (. ?)))")
}
