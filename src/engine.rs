use crate::document::{Corpus, Document};
use crate::error::{Error, Result};
use crate::index::IncidenceTable;
use crate::lexicon::Lexicon;
use crate::ranking::{compute_weights, rank_documents, SimilarityRow, WeightRecord};
use crate::tokenizer::Tokenizer;
use crate::verdict::{select, Verdict};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Every product of a ranking run, in the order it was computed
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub original: Corpus,
    pub cleaned: Corpus,
    pub lexicon: Lexicon,
    pub query: String,
    pub incidence: IncidenceTable,
    pub weights: Vec<WeightRecord>,
    pub similarity: Vec<SimilarityRow>,
    pub verdict: Verdict,
}

/// Binary independence ranking pipeline
pub struct Engine {
    tokenizer: Tokenizer,
}

impl Engine {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Rank raw `(identifier, text)` documents against a raw query.
    ///
    /// The whole pipeline completes before anything is returned, so a
    /// failure never yields a partial report.
    pub fn run<I, S, T>(&self, raw_documents: I, query: &str) -> Result<Report>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let original = Corpus::new(
            raw_documents
                .into_iter()
                .map(|(id, text)| Document::new(id, self.tokenizer.tokenize(text.as_ref())))
                .collect(),
        );
        if original.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let mut seen = HashSet::new();
        if let Some(id) = original.ids().find(|id| !seen.insert(*id)) {
            return Err(Error::DuplicateDocument { id: id.to_string() });
        }

        let cleaned = original.map_tokens(|tokens| self.tokenizer.stopword_filter(tokens));
        let lexicon = Lexicon::build(&cleaned);
        info!(documents = cleaned.len(), terms = lexicon.len(), "built lexicon");

        let query_tokens = self.tokenizer.analyze_query(query);
        let incidence = IncidenceTable::build(&cleaned, &lexicon, &query_tokens);
        let weights = compute_weights(&incidence)?;
        let similarity = rank_documents(&incidence, &weights);
        let verdict = select(&similarity);
        info!(winners = ?verdict.documents(), "ranking complete");

        Ok(Report {
            original,
            cleaned,
            lexicon,
            query: query.to_string(),
            incidence,
            weights,
            similarity,
            verdict,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Tokenizer::new())
    }
}
