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

mod command;

use clap::{Parser, Subcommand};
use command::{
    AskInput, AskStrategy, CommandStrategy, InfoStrategy, IngestInput, IngestStrategy,
    InitStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "factqa")]
#[command(about = "Answer yes/no questions about a document", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/factqa/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and answer questions about it
    Ask {
        /// Document to learn facts from
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Single question to answer
        #[arg(short, long)]
        question: Option<String>,

        /// Ignore any saved corpus and parse the document again
        #[arg(long)]
        rebuild: bool,
    },
    /// Parse a document and save its facts
    Ingest {
        /// Document to learn facts from
        #[arg(short, long)]
        document: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            document,
            question,
            rebuild,
        } => {
            AskStrategy
                .execute(AskInput {
                    config_path: cli.config,
                    document,
                    question,
                    rebuild,
                })
                .await
        }
        Commands::Ingest { document } => {
            IngestStrategy
                .execute(IngestInput {
                    config_path: cli.config,
                    document,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(cli.config).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
