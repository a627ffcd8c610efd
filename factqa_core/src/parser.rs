use async_trait::async_trait;

use crate::tree::ParseTree;

/// Source of constituency parses.
///
/// Returns one tree per sentence the parser finds in `text`. Implementations
/// are expected to be initialized once and shared read-only.
#[async_trait]
pub trait ConstituencyParser: Send + Sync {
    async fn parse(&self, text: &str) -> anyhow::Result<Vec<ParseTree>>;
}

#[async_trait]
impl<P: ConstituencyParser + ?Sized> ConstituencyParser for std::sync::Arc<P> {
    async fn parse(&self, text: &str) -> anyhow::Result<Vec<ParseTree>> {
        (**self).parse(text).await
    }
}
