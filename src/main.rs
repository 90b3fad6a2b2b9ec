use anyhow::{Context, Result};
use bimrank::{Config, Engine, Storage};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Rank documents against a query with the binary independence model", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the documents and the query file
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// File name prefix that marks a document
    #[arg(short, long)]
    prefix: Option<String>,

    /// Query file, relative to the corpus directory
    #[arg(long)]
    query_file: Option<PathBuf>,

    /// Query text; takes precedence over the query file
    #[arg(short, long)]
    query: Option<String>,

    /// Stop word (repeatable); replaces the default list
    #[arg(long = "stopword")]
    stopwords: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).context("Failed to load config")?,
            None => Config::default(),
        };

        if let Some(dir) = &self.dir {
            config.corpus_dir = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.document_prefix = prefix.clone();
        }
        if let Some(query_file) = &self.query_file {
            config.query_file = query_file.clone();
        }
        if !self.stopwords.is_empty() {
            config.stopwords = self.stopwords.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("bimrank=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    let storage = Storage::open(&config.corpus_dir).context("Failed to open corpus")?;
    let documents = storage
        .load_documents(&config.document_prefix)
        .context("Failed to load documents")?;
    let query = match &args.query {
        Some(q) => q.trim().to_string(),
        None => storage
            .load_query(&config.query_file)
            .context("Failed to load query")?,
    };
    info!(query = %query, "ranking");

    let engine = Engine::new(config.tokenizer());
    let report = engine.run(documents, &query).context("Ranking failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
