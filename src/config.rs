use crate::error::{Error, Result};
use crate::tokenizer::{Tokenizer, DEFAULT_STOPWORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the document files
    pub corpus_dir: PathBuf,
    /// File name prefix that marks a document
    pub document_prefix: String,
    /// Query file, relative to `corpus_dir` unless absolute
    pub query_file: PathBuf,
    pub stopwords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("."),
            document_prefix: "Document".to_string(),
            query_file: PathBuf::from("consulta.txt"),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load a config file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| Error::unreadable("config file", path, source))?;
        serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::with_stopwords(&self.stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bimrank.json");
        fs::write(&path, r#"{ "document_prefix": "Doc" }"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.document_prefix, "Doc");
        assert_eq!(config.query_file, PathBuf::from("consulta.txt"));
        assert_eq!(config.stopwords.len(), DEFAULT_STOPWORDS.len());
        Ok(())
    }

    #[test]
    fn test_custom_stopwords_reach_tokenizer() {
        let config = Config {
            stopwords: vec!["the".to_string()],
            ..Default::default()
        };
        assert_eq!(config.tokenizer().analyze("The cat y el"), vec!["cat", "y", "el"]);
    }

    #[test]
    fn test_invalid_json_keeps_parse_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("bimrank.json");
        fs::write(&path, "{ not json")?;

        match Config::load(&path) {
            Err(Error::Config { path: reported, source }) => {
                assert_eq!(reported, path);
                assert!(source.is_syntax());
            }
            other => panic!("expected Config error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_missing_file_keeps_io_error() {
        match Config::load("/definitely/not/here.json") {
            Err(Error::InputMissing { source: Some(source), .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected InputMissing, got {:?}", other),
        }
    }
}
