use factqa_core::{FactStore, QuestionMatcher};
use factqa_parser::CoreNlpParser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::{CommonComponents, ingest_document, init_common_components, resolve_document};

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub config_path: Option<PathBuf>,
    /// Document override
    pub document: Option<PathBuf>,
    /// Optional single question (non-interactive mode)
    pub question: Option<String>,
    /// Parse the document even if a saved corpus exists
    pub rebuild: bool,
}

/// Strategy for answering questions about a document.
///
/// Loads the saved corpus next to the document when there is one, otherwise
/// parses the document and saves the result. Then answers a single question
/// or reads questions from stdin until `q`, `quit`, `exit` or end of input.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(input.config_path.as_deref())?;
        let document = resolve_document(&common.config, input.document)?;

        let store = load_or_ingest(&common, &document, input.rebuild).await?;
        let matcher = QuestionMatcher::new(
            &common.extractor,
            &store,
            common.config.matcher.clone(),
        );

        if let Some(question) = input.question {
            println!("{}", matcher.answer(&question).await);
        } else {
            run_interactive(&matcher).await?;
        }

        Ok(())
    }
}

async fn load_or_ingest(
    common: &CommonComponents,
    document: &std::path::Path,
    rebuild: bool,
) -> anyhow::Result<FactStore> {
    let corpus_path = common.config.corpus.corpus_path(document);

    if corpus_path.exists() && !rebuild {
        println!("Detected saved database, loading...");
        return Ok(FactStore::load(&corpus_path)?);
    }

    ingest_document(common, document).await
}

async fn run_interactive(matcher: &QuestionMatcher<'_, CoreNlpParser>) -> anyhow::Result<()> {
    info!("Ready for questions. Type 'q' to quit.");

    loop {
        print!("statement> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if QUIT_COMMANDS.contains(&line) {
            break;
        }

        if line.is_empty() {
            continue;
        }

        println!("{}", matcher.answer(line).await);
    }

    Ok(())
}
