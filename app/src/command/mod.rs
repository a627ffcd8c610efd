//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use factqa_config::Config;
use factqa_core::{CorpusBuilder, FactStore, Lexicon, TripleExtractor};
use factqa_parser::CoreNlpParser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod ask;
mod info;
mod ingest;
mod init;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use info::InfoStrategy;
pub use ingest::{IngestInput, IngestStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Components shared by the commands that touch a corpus.
struct CommonComponents {
    config: Config,
    extractor: TripleExtractor<CoreNlpParser>,
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    config_path.map_or_else(Config::load, Config::load_from)
}

fn init_common_components(config_path: Option<&Path>) -> anyhow::Result<CommonComponents> {
    let config = load_config(config_path)?;

    let parser = CoreNlpParser::new(
        &config.parser.url,
        Duration::from_secs(config.parser.timeout_secs),
    )?
    .with_retry_delays(config.parser.retry_delays_secs.clone());

    let lexicon = Lexicon::from_config(&config.lexicon);
    info!(
        "Lexicon: {} synonyms, {} filler words, {} stemming",
        lexicon.synonym_count(),
        lexicon.filler_count(),
        lexicon.stem_mode().as_str()
    );

    Ok(CommonComponents {
        extractor: TripleExtractor::new(parser, Arc::new(lexicon)),
        config,
    })
}

/// Document from the command line, falling back to the configured one.
fn resolve_document(config: &Config, document: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    document
        .or_else(|| config.corpus.document.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No document given. Pass --document or set corpus.document in config.")
        })
}

/// Parse `document`, print the startup report and save the facts.
async fn ingest_document(common: &CommonComponents, document: &Path) -> anyhow::Result<FactStore> {
    let text = std::fs::read_to_string(document)
        .map_err(|e| anyhow::anyhow!("Cannot read document {}: {e}", document.display()))?;

    info!("Parsing {}", document.display());
    let (store, report) = CorpusBuilder::new(&common.extractor)
        .build_document(&text)
        .await?;
    println!("{report}");

    let corpus_path = common.config.corpus.corpus_path(document);
    store.save(&corpus_path)?;

    Ok(store)
}
