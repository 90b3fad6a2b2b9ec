use crate::error::{Error, Result};
use crate::index::{IncidenceRow, IncidenceTable};
use serde::Serialize;
use tracing::debug;

/// Probability that a relevant document contains a term, fixed by the model
pub const PRIOR: f64 = 0.5;

/// Per-term measures of the binary independence model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRecord {
    pub term: String,
    /// Documents containing the term
    pub ni: usize,
    pub pi: f64,
    /// `ni / N`
    pub qi: f64,
    /// `log10((N - ni) / ni)` rounded to two decimals
    pub ci: f64,
}

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl WeightRecord {
    /// Derive the measures for a term seen in `ni` of `document_count` documents.
    ///
    /// Fails when the log-odds is undefined, i.e. unless `0 < ni < document_count`.
    pub fn new(term: &str, ni: usize, document_count: usize) -> Result<Self> {
        if ni == 0 || ni >= document_count {
            return Err(Error::UndefinedWeight {
                term: term.to_string(),
                ni,
                document_count,
            });
        }

        let n = document_count as f64;
        let ni_f = ni as f64;

        Ok(Self {
            term: term.to_string(),
            ni,
            pi: PRIOR,
            qi: ni_f / n,
            ci: round2(((n - ni_f) / ni_f).log10()),
        })
    }
}

/// Compute one weight record per lexicon term, in lexicon order.
///
/// Stops at the first term whose weight is undefined.
pub fn compute_weights(table: &IncidenceTable) -> Result<Vec<WeightRecord>> {
    let document_count = table.total_documents();
    if document_count == 0 {
        return Err(Error::EmptyCorpus);
    }

    let weights = table
        .lexicon()
        .iter()
        .zip(table.frequencies())
        .map(|(term, &ni)| WeightRecord::new(term, ni, document_count))
        .collect::<Result<Vec<_>>>()?;

    debug!(terms = weights.len(), document_count, "computed term weights");
    Ok(weights)
}

/// Similarity of one document against the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityRow {
    pub id: String,
    pub flags: Vec<u8>,
    pub score: f64,
    /// Weight of the last lexicon term shared with the query, if any
    pub last_ci: Option<f64>,
}

/// Sum of `ci` over the terms present in both the document and the query.
pub fn score(document: &IncidenceRow, query: &IncidenceRow, weights: &[WeightRecord]) -> SimilarityRow {
    let mut score = 0.0;
    let mut last_ci = None;

    for (i, weight) in weights.iter().enumerate() {
        if document.is_present(i) && query.is_present(i) {
            score += weight.ci;
            last_ci = Some(weight.ci);
        }
    }

    SimilarityRow {
        id: document.id.clone(),
        flags: document.flags.clone(),
        score,
        last_ci,
    }
}

/// Score every document of the table, preserving corpus order.
pub fn rank_documents(table: &IncidenceTable, weights: &[WeightRecord]) -> Vec<SimilarityRow> {
    table
        .documents()
        .iter()
        .map(|row| score(row, table.query(), weights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Corpus, Document};
    use crate::lexicon::Lexicon;

    fn doc(id: &str, text: &str) -> Document {
        Document::new(id, text.split_whitespace().map(str::to_string).collect())
    }

    fn table(docs: &[(&str, &str)], query: &str) -> IncidenceTable {
        let corpus = Corpus::new(docs.iter().map(|(id, text)| doc(id, text)).collect());
        let lexicon = Lexicon::build(&corpus);
        let query: Vec<String> = query.split_whitespace().map(str::to_string).collect();
        IncidenceTable::build(&corpus, &lexicon, &query)
    }

    #[test]
    fn test_weight_record() -> Result<()> {
        let w = WeightRecord::new("gato", 1, 4)?;
        assert_eq!(w.ni, 1);
        assert_eq!(w.pi, 0.5);
        assert_eq!(w.qi, 0.25);
        assert_eq!(w.ci, 0.48);

        let w = WeightRecord::new("come", 2, 4)?;
        assert_eq!(w.ci, 0.0);

        let w = WeightRecord::new("x", 3, 4)?;
        assert_eq!(w.qi, 0.75);
        assert_eq!(w.ci, -0.48);
        Ok(())
    }

    #[test]
    fn test_weight_undefined_when_term_in_every_document() {
        let err = WeightRecord::new("come", 2, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::UndefinedWeight { ref term, ni: 2, document_count: 2 } if term == "come"
        ));
    }

    #[test]
    fn test_weight_undefined_for_zero_frequency() {
        let err = WeightRecord::new("ghost", 0, 3).unwrap_err();
        assert!(matches!(err, Error::UndefinedWeight { ni: 0, .. }));
    }

    #[test]
    fn test_compute_weights_reports_offending_term() {
        let t = table(&[("D1", "gato come"), ("D2", "perro come")], "gato");
        match compute_weights(&t) {
            Err(Error::UndefinedWeight { term, .. }) => assert_eq!(term, "come"),
            other => panic!("expected UndefinedWeight, got {:?}", other),
        }
    }

    #[test]
    fn test_score_is_sum_of_shared_weights() -> Result<()> {
        let t = table(
            &[
                ("D1", "gato come pescado"),
                ("D2", "perro come carne"),
                ("D3", "pajaro vuela alto"),
                ("D4", "pez nada lejos"),
            ],
            "gato come",
        );
        let weights = compute_weights(&t)?;
        let rows = rank_documents(&t, &weights);

        assert_eq!(rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["D1", "D2", "D3", "D4"]);
        assert_eq!(rows[0].score, 0.48);
        assert_eq!(rows[0].last_ci, Some(0.48));
        assert_eq!(rows[1].score, 0.0);
        assert_eq!(rows[1].last_ci, Some(0.0));
        assert_eq!(rows[2].score, 0.0);
        assert_eq!(rows[2].last_ci, None);
        Ok(())
    }

    #[test]
    fn test_no_shared_terms_scores_zero() -> Result<()> {
        let t = table(&[("D1", "a b"), ("D2", "c d"), ("D3", "e f")], "z");
        let weights = compute_weights(&t)?;
        assert!(rank_documents(&t, &weights).iter().all(|r| r.score == 0.0));
        Ok(())
    }
}
