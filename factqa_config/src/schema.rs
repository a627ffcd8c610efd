use factqa_core::MatcherConfig;
use factqa_core::lexicon::LexiconConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParserConfig {
    #[serde(default = "ParserConfig::default_url")]
    pub url: String,
    #[serde(default = "ParserConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "ParserConfig::default_retry_delays_secs")]
    pub retry_delays_secs: Vec<u64>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout_secs: Self::default_timeout_secs(),
            retry_delays_secs: Self::default_retry_delays_secs(),
        }
    }
}

impl ParserConfig {
    fn default_url() -> String {
        "http://localhost:9000".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    fn default_retry_delays_secs() -> Vec<u64> {
        vec![1, 2, 4]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorpusConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
    #[serde(default = "CorpusConfig::default_extension")]
    pub extension: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            document: None,
            extension: Self::default_extension(),
        }
    }
}

impl CorpusConfig {
    fn default_extension() -> String {
        "corpus".to_string()
    }

    /// Where the facts extracted from `document` are persisted.
    #[must_use]
    pub fn corpus_path(&self, document: &Path) -> PathBuf {
        let mut name = document.as_os_str().to_owned();
        name.push(".");
        name.push(&self.extension);
        PathBuf::from(name)
    }
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("factqa"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'factqa init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config {}: {e}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Start a CoreNLP server at the configured parser url");
        println!("   2. Run 'factqa ask -d <document>' to load a document and ask questions");
        println!();
        println!("Configuration options:");
        println!("   - lexicon.synonyms: surface form -> canonical form");
        println!("   - lexicon.filler_words: words ignored when scoring");
        println!("   - lexicon.stem_mode: historical | strip");
        println!("   - matcher.threshold: ratio (default 0.75) or half");
        println!();
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "parser": {
    "url": "http://localhost:9000",
    "timeout_secs": 30,
    "retry_delays_secs": [1, 2, 4]
  },
  "lexicon": {
    "synonyms": {
      "abraham lincoln": "lincoln",
      "abraham": "lincoln",
      "he": "lincoln",
      "assassinated": "killed"
    },
    "filler_words": ["the", "is", "was", "a", "in", "are", "it's", "an", "and", "for"],
    "stem_mode": "historical"
  },
  "matcher": {
    "threshold": { "kind": "ratio", "ratio": 0.75 }
  },
  "corpus": {
    "extension": "corpus"
  }
}"#;
