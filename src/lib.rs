pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod lexicon;
pub mod ranking;
pub mod report;
pub mod storage;
pub mod tokenizer;
pub mod verdict;

// Re-export commonly used types
pub use config::Config;
pub use document::{Corpus, Document};
pub use engine::{Engine, Report};
pub use error::{Error, Result};
pub use index::IncidenceTable;
pub use lexicon::Lexicon;
pub use ranking::{SimilarityRow, WeightRecord};
pub use storage::Storage;
pub use tokenizer::Tokenizer;
pub use verdict::Verdict;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
