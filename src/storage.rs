use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory-backed source of raw documents and the query text
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open a corpus directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::input_missing("corpus directory", root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every file whose name starts with `prefix`.
    ///
    /// Returns `(identifier, raw_text)` pairs ordered by file name, where the
    /// identifier is the file name without its extension. Two files sharing
    /// an identifier (`Document1.txt`, `Document1.md`) are rejected.
    pub fn load_documents(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let entries = fs::read_dir(&self.root)
            .map_err(|source| Error::unreadable("corpus directory", &self.root, source))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.starts_with(prefix));
            if matches && path.is_file() {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(Error::input_missing(
                format!("documents with prefix '{}'", prefix),
                &self.root,
            ));
        }
        paths.sort();

        let mut seen = HashSet::new();
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let id = document_id(&path);
            if !seen.insert(id.clone()) {
                return Err(Error::DuplicateDocument { id });
            }
            let text = fs::read_to_string(&path)
                .map_err(|source| Error::unreadable("document", &path, source))?;
            debug!(id = %id, bytes = text.len(), "read document");
            documents.push((id, text));
        }

        info!(count = documents.len(), root = %self.root.display(), "loaded documents");
        Ok(documents)
    }

    /// Read the query file, trimmed of surrounding whitespace.
    pub fn load_query<P: AsRef<Path>>(&self, file: P) -> Result<String> {
        let path = self.root.join(file);
        let text = fs::read_to_string(&path)
            .map_err(|source| Error::unreadable("query file", &path, source))?;
        Ok(text.trim().to_string())
    }
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
