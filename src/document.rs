use serde::{Deserialize, Serialize};

/// Reserved identifier of the query row.
pub const QUERY_ID: &str = "Query";

/// Reserved identifier of the document-frequency row.
pub const FREQUENCY_ID: &str = "ni";

/// A document as an ordered sequence of tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    /// Presence test, ignoring how often the term occurs.
    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }

    /// Space-joined tokens, as shown in reports
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Documents in insertion order.
///
/// Row alignment in every downstream table follows this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Produce a new corpus with every document's tokens transformed.
    pub fn map_tokens<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[String]) -> Vec<String>,
    {
        Self {
            documents: self
                .documents
                .iter()
                .map(|d| Document::new(d.id.clone(), f(&d.tokens)))
                .collect(),
        }
    }
}
