use serde::{Deserialize, Serialize};

/// Subject/predicate/object extracted from one sentence or question.
///
/// Each field may be missing independently. The subject is stored already
/// synonym-resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Option<String>,
    pub predicate: Option<String>,
    pub object: Option<String>,
}

impl Triple {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: Some(subject.into()),
            predicate: Some(predicate.into()),
            object: Some(object.into()),
        }
    }

    /// True when extraction found nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.subject.is_none() && self.predicate.is_none() && self.object.is_none()
    }

    /// Key under which the fact store files this triple.
    #[must_use]
    pub fn subject_key(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.subject.as_deref().unwrap_or("-"),
            self.predicate.as_deref().unwrap_or("-"),
            self.object.as_deref().unwrap_or("-")
        )
    }
}
