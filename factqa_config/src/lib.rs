mod schema;

pub use schema::{Config, CorpusConfig, ParserConfig};
