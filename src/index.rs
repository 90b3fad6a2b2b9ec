use crate::document::{Corpus, FREQUENCY_ID, QUERY_ID};
use crate::lexicon::Lexicon;
use serde::Serialize;

/// One binary row of the incidence table, aligned with the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidenceRow {
    pub id: String,
    pub flags: Vec<u8>,
}

impl IncidenceRow {
    pub fn is_present(&self, position: usize) -> bool {
        self.flags.get(position).copied() == Some(1)
    }
}

/// Binary term-document incidence: one row per document, a query row and
/// the per-term document frequency (`ni`).
///
/// All rows are aligned with `lexicon`: entry `i` of any row refers to
/// `lexicon.terms()[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct IncidenceTable {
    lexicon: Lexicon,
    documents: Vec<IncidenceRow>,
    query: IncidenceRow,
    frequencies: Vec<usize>,
}

impl IncidenceTable {
    /// Build the table from cleaned documents and already-split query tokens.
    ///
    /// Query terms missing from the lexicon are kept out of the table; they
    /// can never match a document.
    pub fn build(corpus: &Corpus, lexicon: &Lexicon, query_tokens: &[String]) -> Self {
        let documents: Vec<IncidenceRow> = corpus
            .documents()
            .iter()
            .map(|doc| IncidenceRow {
                id: doc.id.clone(),
                flags: lexicon.iter().map(|term| doc.contains(term) as u8).collect(),
            })
            .collect();

        let query = IncidenceRow {
            id: QUERY_ID.to_string(),
            flags: lexicon
                .iter()
                .map(|term| query_tokens.iter().any(|q| q == term) as u8)
                .collect(),
        };

        let frequencies: Vec<usize> = (0..lexicon.len())
            .map(|i| documents.iter().map(|row| row.flags[i] as usize).sum::<usize>())
            .collect();

        Self {
            lexicon: lexicon.clone(),
            documents,
            query,
            frequencies,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Document rows in corpus order, query excluded.
    pub fn documents(&self) -> &[IncidenceRow] {
        &self.documents
    }

    pub fn query(&self) -> &IncidenceRow {
        &self.query
    }

    /// Number of documents containing each lexicon term
    pub fn frequencies(&self) -> &[usize] {
        &self.frequencies
    }

    /// Document frequency of a single term, if it is in the lexicon.
    pub fn doc_frequency(&self, term: &str) -> Option<usize> {
        self.lexicon
            .iter()
            .position(|t| t == term)
            .map(|i| self.frequencies[i])
    }

    pub fn total_documents(&self) -> usize {
        self.documents.len()
    }

    /// Row labels in display order: documents, query, then `ni`.
    pub fn row_ids(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|r| r.id.as_str())
            .chain([QUERY_ID, FREQUENCY_ID])
            .collect()
    }
}
