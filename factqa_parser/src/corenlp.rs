use async_trait::async_trait;
use factqa_core::{ConstituencyParser, ParseTree};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::retry::retry_with_backoff;

const PROPERTIES: &str = r#"{"annotators":"tokenize,ssplit,pos,parse","outputFormat":"json"}"#;

#[derive(Debug, Deserialize)]
struct AnnotatedDocument {
    #[serde(default)]
    sentences: Vec<AnnotatedSentence>,
}

#[derive(Debug, Deserialize)]
struct AnnotatedSentence {
    parse: Option<String>,
}

/// Client for a `CoreNLP` server's constituency parser.
pub struct CoreNlpParser {
    client: Client,
    endpoint: Url,
    retry_delays: Vec<u64>,
}

impl CoreNlpParser {
    /// # Errors
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        info!("Creating CoreNlpParser for {base_url}");
        let endpoint = Url::parse_with_params(base_url, &[("properties", PROPERTIES)])?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            retry_delays: vec![1, 2, 4],
        })
    }

    #[must_use]
    pub fn with_retry_delays(mut self, retry_delays: Vec<u64>) -> Self {
        self.retry_delays = retry_delays;
        self
    }

    async fn try_parse(&self, text: &str) -> anyhow::Result<Vec<ParseTree>> {
        let document = self
            .client
            .post(self.endpoint.clone())
            .body(text.to_string())
            .send()
            .await?
            .error_for_status()?
            .json::<AnnotatedDocument>()
            .await?;

        parse_trees(document)
    }
}

fn parse_trees(document: AnnotatedDocument) -> anyhow::Result<Vec<ParseTree>> {
    document
        .sentences
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            let bracketed = sentence
                .parse
                .ok_or_else(|| anyhow::anyhow!("Sentence {i} has no parse"))?;
            ParseTree::from_bracketed(&bracketed)
                .map_err(|e| anyhow::anyhow!("Invalid parse for sentence {i}: {e}"))
        })
        .collect()
}

#[async_trait]
impl ConstituencyParser for CoreNlpParser {
    async fn parse(&self, text: &str) -> anyhow::Result<Vec<ParseTree>> {
        debug!("Requesting parse for {} bytes", text.len());
        retry_with_backoff(|| self.try_parse(text), &self.retry_delays).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn document(json: &str) -> AnnotatedDocument {
        serde_json::from_str(json).expect("valid JSON should deserialize")
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_one_tree_per_sentence() {
        let doc = document(
            r#"{"sentences": [
                {"index": 0, "parse": "(ROOT\n  (S\n    (NP (NNP Lincoln))\n    (VP (VBD won))))"},
                {"index": 1, "parse": "(ROOT (S (NP (NNP Booth)) (VP (VBD fled))))"}
            ]}"#,
        );
        let trees = parse_trees(doc).expect("parses should be valid");
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].text(), "Lincoln won");
        assert_eq!(trees[1].text(), "Booth fled");
    }

    #[test]
    fn missing_parse_is_an_error() {
        let doc = document(r#"{"sentences": [{"index": 0}]}"#);
        assert!(parse_trees(doc).is_err());
    }

    #[test]
    fn malformed_parse_is_an_error() {
        let doc = document(r#"{"sentences": [{"parse": "(ROOT (S"}]}"#);
        assert!(parse_trees(doc).is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn endpoint_carries_properties() {
        let parser = CoreNlpParser::new("http://localhost:9000", Duration::from_secs(5))
            .expect("parser should build");
        let query = parser.endpoint.query().unwrap_or_default();
        assert!(query.starts_with("properties="));
        assert!(query.contains("outputFormat"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        assert!(CoreNlpParser::new("not a url", Duration::from_secs(5)).is_err());
    }
}
