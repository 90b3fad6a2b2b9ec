//! Selection of the most relevant documents from similarity scores.

use crate::ranking::SimilarityRow;
use serde::Serialize;

/// Final relevance decision of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Every document scored exactly zero.
    NoRelevantDocument,
    /// A single document holds the threshold score.
    Single { document: String, score: f64 },
    /// Several documents share the threshold score.
    Tied { documents: Vec<String>, score: f64 },
}

impl Verdict {
    /// Documents named by the verdict, in corpus order.
    pub fn documents(&self) -> Vec<&str> {
        match self {
            Self::NoRelevantDocument => Vec::new(),
            Self::Single { document, .. } => vec![document.as_str()],
            Self::Tied { documents, .. } => documents.iter().map(String::as_str).collect(),
        }
    }
}

/// Score every winner must match.
///
/// The maximum, unless no document scored above zero, in which case the
/// minimum. `None` for an empty slice.
pub fn relevance_threshold(rows: &[SimilarityRow]) -> Option<f64> {
    let mut scores = rows.iter().map(|r| r.score);
    let first = scores.next()?;
    let (min, max) = scores.fold((first, first), |(min, max), s| (min.min(s), max.max(s)));

    Some(if max <= 0.0 { min } else { max })
}

/// Pick the documents whose score equals the relevance threshold.
pub fn select(rows: &[SimilarityRow]) -> Verdict {
    let threshold = match relevance_threshold(rows) {
        Some(t) if t != 0.0 => t,
        _ => return Verdict::NoRelevantDocument,
    };

    let mut winners: Vec<String> = rows
        .iter()
        .filter(|r| r.score == threshold)
        .map(|r| r.id.clone())
        .collect();

    if winners.len() == 1 {
        Verdict::Single {
            document: winners.remove(0),
            score: threshold,
        }
    } else {
        Verdict::Tied {
            documents: winners,
            score: threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(scores: &[(&str, f64)]) -> Vec<SimilarityRow> {
        scores
            .iter()
            .map(|(id, score)| SimilarityRow {
                id: id.to_string(),
                flags: Vec::new(),
                score: *score,
                last_ci: None,
            })
            .collect()
    }

    #[test]
    fn test_single_max() {
        let verdict = select(&rows(&[("D1", 0.48), ("D2", 0.0), ("D3", 0.3)]));
        assert_eq!(
            verdict,
            Verdict::Single {
                document: "D1".to_string(),
                score: 0.48
            }
        );
    }

    #[test]
    fn test_ties_are_all_reported() {
        let verdict = select(&rows(&[("D1", 0.3), ("D2", 0.1), ("D3", 0.3)]));
        assert_eq!(verdict.documents(), vec!["D1", "D3"]);
        assert!(matches!(verdict, Verdict::Tied { score, .. } if score == 0.3));
    }

    #[test]
    fn test_all_non_positive_uses_min() {
        let verdict = select(&rows(&[("D1", 0.0), ("D2", -0.3), ("D3", -0.18)]));
        assert_eq!(
            verdict,
            Verdict::Single {
                document: "D2".to_string(),
                score: -0.3
            }
        );
    }

    #[test]
    fn test_ties_at_negative_minimum_are_all_reported() {
        let verdict = select(&rows(&[("D1", -0.48), ("D2", -0.48), ("D3", 0.0)]));
        assert_eq!(
            verdict,
            Verdict::Tied {
                documents: vec!["D1".to_string(), "D2".to_string()],
                score: -0.48
            }
        );
    }

    #[test]
    fn test_all_zero_is_no_relevant_document() {
        assert_eq!(
            select(&rows(&[("D1", 0.0), ("D2", 0.0)])),
            Verdict::NoRelevantDocument
        );
        assert_eq!(select(&[]), Verdict::NoRelevantDocument);
    }

    #[test]
    fn test_threshold() {
        assert_eq!(relevance_threshold(&rows(&[("a", -1.0), ("b", 2.0)])), Some(2.0));
        assert_eq!(relevance_threshold(&rows(&[("a", -1.0), ("b", 0.0)])), Some(-1.0));
        assert_eq!(relevance_threshold(&[]), None);
    }
}
