//! Triple extraction from the top level of a constituency parse.
//!
//! Only the direct children of each sentence's first subtree are inspected:
//! the first noun phrase becomes the subject, the first verb phrase the
//! predicate, and the first noun phrase directly inside a verb phrase the
//! object. Every field is set at most once.

use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::parser::ConstituencyParser;
use crate::tree::ParseTree;
use crate::triple::Triple;

/// Top-level constituent kinds the extractor acts on.
#[derive(Debug, Clone, Copy)]
enum Constituent<'a> {
    VerbPhrase(&'a ParseTree),
    NounPhrase(&'a ParseTree),
    Other(&'a str),
}

impl<'a> Constituent<'a> {
    fn classify(node: &'a ParseTree) -> Self {
        match node.label.as_str() {
            "VP" => Self::VerbPhrase(node),
            "NP" => Self::NounPhrase(node),
            other => Self::Other(other),
        }
    }
}

/// Reduces sentences to triples using an external parser.
pub struct TripleExtractor<P> {
    parser: P,
    lexicon: Arc<Lexicon>,
}

impl<P> TripleExtractor<P>
where
    P: ConstituencyParser,
{
    #[must_use]
    pub const fn new(parser: P, lexicon: Arc<Lexicon>) -> Self {
        Self { parser, lexicon }
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Parse `text` and extract its triple.
    ///
    /// # Errors
    /// `Parser` only when the parser itself fails. A parse with no usable
    /// constituents yields an empty triple.
    pub async fn process_sentence(&self, text: &str) -> Result<Triple> {
        let trees = self
            .parser
            .parse(text)
            .await
            .map_err(|e| Error::Parser(format!("{e:#}")))?;
        Ok(self.extract(&trees))
    }

    /// Extract a triple from already parsed sentences.
    ///
    /// Fields left unset by one tree may be filled by a later one.
    #[must_use]
    pub fn extract(&self, trees: &[ParseTree]) -> Triple {
        let mut triple = Triple::default();

        for root in trees {
            let Some(sentence) = root.first_child() else {
                continue;
            };

            for child in &sentence.children {
                match Constituent::classify(child) {
                    Constituent::VerbPhrase(vp) => {
                        if triple.object.is_none() {
                            triple.object = vp
                                .children
                                .iter()
                                .find(|c| c.label == "NP")
                                .map(ParseTree::text);
                        }
                        if triple.predicate.is_none() {
                            triple.predicate = Some(vp.text());
                        }
                    }
                    Constituent::NounPhrase(np) => {
                        if triple.subject.is_none() {
                            triple.subject = Some(self.lexicon.resolve_synonym(&np.text()));
                        }
                    }
                    Constituent::Other(label) => {
                        debug!("Do not understand label: {label}");
                    }
                }
            }
        }

        triple
    }
}
