//! Subject-indexed fact store.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::corpus;
use crate::error::Result;
use crate::triple::Triple;

/// Facts in ingestion order, indexed by normalized subject.
///
/// Facts without a subject are filed under the empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactStore {
    facts: Vec<Triple>,
    by_subject: HashMap<String, Vec<usize>>,
}

impl FactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact under its own subject.
    pub fn insert(&mut self, triple: Triple) {
        let index = self.facts.len();
        self.by_subject
            .entry(triple.subject_key().to_string())
            .or_default()
            .push(index);
        self.facts.push(triple);
    }

    /// Facts filed under `subject`, in insertion order.
    ///
    /// Returns `None` when the subject has never been seen.
    pub fn facts_for<'a>(
        &'a self,
        subject: &str,
    ) -> Option<impl Iterator<Item = &'a Triple> + use<'a>> {
        self.by_subject
            .get(subject)
            .map(|indices| indices.iter().map(|&i| &self.facts[i]))
    }

    #[must_use]
    pub fn contains_subject(&self, subject: &str) -> bool {
        self.by_subject.contains_key(subject)
    }

    /// All facts in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.facts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.by_subject.len()
    }

    /// Read a persisted store without invoking the parser.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let store = corpus::read(BufReader::new(file))?;
        info!(
            "Loaded {} facts for {} subjects from {}",
            store.len(),
            store.subject_count(),
            path.display()
        );
        Ok(store)
    }

    /// Persist the store, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        corpus::write(self, &mut writer)?;
        writer.flush()?;
        info!("Saved {} facts to {}", self.len(), path.display());
        Ok(())
    }
}

impl FromIterator<Triple> for FactStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut store = Self::new();
        for triple in iter {
            store.insert(triple);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_subject_preserving_order() {
        let store: FactStore = [
            Triple::new("lincoln", "was born in kentucky", "kentucky"),
            Triple::new("booth", "shot lincoln", "lincoln"),
            Triple::new("lincoln", "was killed by booth", "booth"),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 3);
        assert_eq!(store.subject_count(), 2);

        let predicates: Vec<_> = store
            .facts_for("lincoln")
            .into_iter()
            .flatten()
            .filter_map(|t| t.predicate.as_deref())
            .collect();
        assert_eq!(predicates, ["was born in kentucky", "was killed by booth"]);
    }

    #[test]
    fn unknown_subject_has_no_entry() {
        let store: FactStore = [Triple::new("lincoln", "won", "election")]
            .into_iter()
            .collect();
        assert!(store.facts_for("washington").is_none());
        assert!(!store.contains_subject("washington"));
    }

    #[test]
    fn subjectless_fact_goes_under_empty_key() {
        let mut store = FactStore::new();
        store.insert(Triple {
            predicate: Some("rained".to_string()),
            ..Triple::default()
        });
        assert!(store.contains_subject(""));
    }
}
