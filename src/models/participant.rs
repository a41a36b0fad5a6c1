//! Participant input model.
//!
//! The scheduler treats participants as opaque identifiers. Callers either
//! pass the identifiers themselves or a bare head count, in which case
//! placeholder names are synthesized.

use serde::{Deserialize, Serialize};

/// Participants to seat.
///
/// Deserializes untagged: a JSON array of strings becomes [`Participants::Names`],
/// a JSON integer becomes [`Participants::Count`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Participants {
    /// Explicit identifiers (display names are passed through unchanged).
    Names(Vec<String>),
    /// Head count; expands to `Participant 1..=N`. Validation caps it at
    /// [`MAX_PARTICIPANTS`](crate::validation::MAX_PARTICIPANTS).
    Count(usize),
}

impl Participants {
    /// Number of participants.
    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Count(n) => *n,
        }
    }

    /// Whether no participant is supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves to the ordered list of identifiers.
    pub fn to_names(&self) -> Vec<String> {
        match self {
            Self::Names(names) => names.clone(),
            Self::Count(n) => (1..=*n).map(|i| format!("Participant {i}")).collect(),
        }
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

impl From<Vec<String>> for Participants {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<Vec<&str>> for Participants {
    fn from(names: Vec<&str>) -> Self {
        Self::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<usize> for Participants {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_synthesizes_names() {
        let p = Participants::Count(3);
        assert_eq!(p.len(), 3);
        assert_eq!(
            p.to_names(),
            vec!["Participant 1", "Participant 2", "Participant 3"]
        );
    }

    #[test]
    fn test_names_passthrough() {
        let p = Participants::from(vec!["Ada", "Grace"]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.to_names(), vec!["Ada", "Grace"]);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_untagged_deserialize() {
        let names: Participants = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(names, Participants::from(vec!["A", "B"]));

        let count: Participants = serde_json::from_str("12").unwrap();
        assert_eq!(count, Participants::Count(12));
    }

    #[test]
    fn test_empty() {
        assert!(Participants::default().is_empty());
        assert!(Participants::Count(0).is_empty());
    }
}
