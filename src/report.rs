//! Console rendering of a ranking [`Report`].

use crate::document::{Corpus, FREQUENCY_ID, QUERY_ID};
use crate::engine::Report;
use crate::verdict::Verdict;
use std::fmt;

/// Width of the row label column
const LABEL_WIDTH: usize = 15;

/// All report sections as aligned text tables.
impl fmt::Display for Report {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &Report) -> fmt::Result {
    writeln!(out, "Original documents:\n")?;
    write_documents(out, &report.original)?;

    writeln!(out, "\nDocuments without stop words:\n")?;
    write_documents(out, &report.cleaned)?;

    let terms = report.lexicon.terms();
    writeln!(out, "\nLexicon:\n")?;
    writeln!(out, "V = {{ {} }}", terms.join(", "))?;

    writeln!(out, "\nQuery: {}", report.query)?;

    let header = terms.join("\t");
    writeln!(out, "\nIncidence table:\n")?;
    writeln!(out, "{}{}", " ".repeat(LABEL_WIDTH + 1), header)?;
    writeln!(out, "{}", "--".repeat(header.chars().count()))?;
    for row in report.incidence.documents() {
        write_row(out, &row.id, &row.flags)?;
        writeln!(out)?;
    }
    write_row(out, QUERY_ID, &report.incidence.query().flags)?;
    writeln!(out)?;
    write_row(out, FREQUENCY_ID, report.incidence.frequencies())?;
    writeln!(out)?;

    writeln!(out, "\nWeights:\n")?;
    writeln!(out, "{:<width$} ni\tpi\tqi\tci", "term", width = LABEL_WIDTH)?;
    for w in &report.weights {
        writeln!(
            out,
            "{:<width$}\t{}\t{}\t{}\t{}",
            w.term,
            w.ni,
            w.pi,
            w.qi,
            w.ci,
            width = LABEL_WIDTH
        )?;
    }

    writeln!(out, "\nSimilarity:\n")?;
    writeln!(out, "{}{}\tsim", " ".repeat(LABEL_WIDTH + 1), header)?;
    for row in &report.similarity {
        write_row(out, &row.id, &row.flags)?;
        writeln!(out, "{}", row.score)?;
    }

    writeln!(out, "\n{}", verdict_message(&report.verdict))
}

fn write_documents(out: &mut fmt::Formatter<'_>, corpus: &Corpus) -> fmt::Result {
    for doc in corpus.documents() {
        writeln!(out, "{}: \"{}\"", doc.id, doc.text())?;
    }
    Ok(())
}

fn write_row<T: fmt::Display>(out: &mut fmt::Formatter<'_>, label: &str, cells: &[T]) -> fmt::Result {
    write!(out, "{:<width$}\t", label, width = LABEL_WIDTH)?;
    for cell in cells {
        write!(out, "{}\t", cell)?;
    }
    Ok(())
}

/// Human-readable phrasing of the verdict.
pub fn verdict_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::NoRelevantDocument => "No relevant document".to_string(),
        Verdict::Single { document, .. } => {
            format!("According to these results the document {} is ranked first", document)
        }
        Verdict::Tied { documents, .. } => format!(
            "According to these results the documents {} are tied for first place",
            documents.join(", ")
        ),
    }
}
