use std::path::PathBuf;
use tracing::info;

use super::{ingest_document, init_common_components, resolve_document};

/// Input parameters for the Ingest command strategy.
#[derive(Debug, Clone)]
pub struct IngestInput {
    pub config_path: Option<PathBuf>,
    pub document: Option<PathBuf>,
}

/// Strategy for parsing a document and saving its facts, replacing any
/// previously saved corpus.
#[derive(Debug, Clone, Copy)]
pub struct IngestStrategy;

impl super::CommandStrategy for IngestStrategy {
    type Input = IngestInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(input.config_path.as_deref())?;
        let document = resolve_document(&common.config, input.document)?;

        let store = ingest_document(&common, &document).await?;
        info!(
            "Stored {} facts about {} subjects",
            store.len(),
            store.subject_count()
        );

        Ok(())
    }
}
