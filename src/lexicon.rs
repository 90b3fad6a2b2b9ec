use crate::document::Corpus;
use serde::Serialize;
use std::collections::BTreeSet;

/// Sorted, deduplicated vocabulary of a cleaned corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lexicon {
    terms: Vec<String>,
}

impl Lexicon {
    /// Union of all document tokens in ascending code-point order.
    pub fn build(corpus: &Corpus) -> Self {
        let terms: BTreeSet<&String> = corpus
            .documents()
            .iter()
            .flat_map(|d| d.tokens.iter())
            .collect();

        Self {
            terms: terms.into_iter().cloned().collect(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
