#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Fact extraction and matching engine.
//!
//! Sentences are reduced to subject/predicate/object triples from the top
//! level of their constituency parse, indexed by normalized subject, and
//! yes/no questions are answered by word overlap against the stored
//! predicates.

pub mod corpus;
mod error;
pub mod extraction;
pub mod ingest;
pub mod lexicon;
pub mod matcher;
mod parser;
pub mod store;
pub mod tree;
mod triple;

pub use error::{Error, QuestionError, Result};
pub use extraction::TripleExtractor;
pub use ingest::{CorpusBuilder, IngestReport, split_sentences};
pub use lexicon::{Lexicon, StemMode};
pub use matcher::{MatcherConfig, QuestionMatcher, ThresholdRule, Verdict};
pub use parser::ConstituencyParser;
pub use store::FactStore;
pub use tree::{ParseTree, TreeError};
pub use triple::Triple;
