use factqa_config::Config;
use factqa_core::ThresholdRule;
use std::path::PathBuf;

use super::load_config;

/// Strategy for displaying configuration information.
///
/// Outputs the parser endpoint, lexicon sizes, scoring rule and the corpus
/// location of the configured document.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Option<PathBuf>;

    async fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        let config = load_config(config_path.as_deref())?;
        print_config(&config);
        Ok(())
    }
}

fn print_config(config: &Config) {
    println!("=== factqa Configuration ===\n");

    println!("Parser:");
    println!("  URL: {}", config.parser.url);
    println!("  Timeout: {}s", config.parser.timeout_secs);
    println!("  Retry Delays: {:?}", config.parser.retry_delays_secs);
    println!();

    println!("Lexicon:");
    println!("  Synonyms: {}", config.lexicon.synonyms.len());
    let mut synonyms: Vec<_> = config.lexicon.synonyms.iter().collect();
    synonyms.sort();
    for (from, to) in synonyms {
        println!("    {from} -> {to}");
    }
    println!("  Filler Words: {}", config.lexicon.filler_words.join(", "));
    println!("  Stem Mode: {}", config.lexicon.stem_mode.as_str());
    println!();

    println!("Matcher:");
    println!("  Threshold: {}", format_threshold(&config.matcher.threshold));
    println!();

    println!("Corpus:");
    match &config.corpus.document {
        Some(document) => {
            println!("  Document: {}", document.display());
            let corpus_path = config.corpus.corpus_path(document);
            let status = if corpus_path.exists() {
                "saved"
            } else {
                "not yet built"
            };
            println!("  Corpus: {} ({status})", corpus_path.display());
        }
        None => println!("  Document: (not set)"),
    }
}

fn format_threshold(rule: &ThresholdRule) -> String {
    match rule {
        ThresholdRule::Ratio { ratio } => format!("Ratio(round(words * {ratio}))"),
        ThresholdRule::Half => "Half(words / 2)".to_string(),
    }
}
