use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Spanish function words dropped from documents before indexing.
    ///
    /// Matching is on the lowercase form only; accents are not folded, so
    /// "están" and "estan" are listed separately.
    pub static ref DEFAULT_STOPWORDS: Vec<&'static str> = vec![
        "a", "al", "con", "de", "del", "el", "en", "es", "están", "la", "los",
        "las", "su", "un", "una", "unos", "unas", "tiene", "va", "y", "estan",
    ];
}

pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_stopwords(DEFAULT_STOPWORDS.iter().copied())
    }

    /// Build a tokenizer with a custom stop-word list.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Split text on whitespace
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Remove stopwords, keeping the original case of survivors
    pub fn stopword_filter(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| !self.is_stopword(t))
            .cloned()
            .collect()
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&token.to_lowercase())
    }

    /// Full document pipeline
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        self.stopword_filter(&tokens)
    }

    /// Queries are split but never stop-word filtered.
    pub fn analyze_query(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
