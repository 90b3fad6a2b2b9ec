use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a ranking run.
///
/// None of these are retried: the pipeline is deterministic, so running it
/// again over the same input fails the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input (document files or the query) could not be found or read.
    #[error("cannot read {what} at {}", path.display())]
    InputMissing {
        what: String,
        path: PathBuf,
        /// Underlying I/O error, absent when nothing matched at all.
        #[source]
        source: Option<io::Error>,
    },

    /// Two documents resolve to the same identifier.
    #[error("duplicate document identifier '{id}'")]
    DuplicateDocument { id: String },

    /// The pipeline was given no documents to rank.
    #[error("corpus is empty, nothing to rank")]
    EmptyCorpus,

    /// The log-odds weight of a term is undefined for its document frequency.
    #[error(
        "weight of term '{term}' is undefined: it appears in {ni} of {document_count} documents"
    )]
    UndefinedWeight {
        term: String,
        ni: usize,
        document_count: usize,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn input_missing(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::InputMissing {
            what: what.into(),
            path: path.into(),
            source: None,
        }
    }

    pub(crate) fn unreadable(
        what: impl Into<String>,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::InputMissing {
            what: what.into(),
            path: path.into(),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
