use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use querent::{corpus, Catalog, FileStore, IndexStore, InvertedIndex};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "querent")]
#[command(about = "Boolean & vector-space retrieval over an inverted index", long_about = None)]
struct Cli {
    /// Directory holding saved indexes
    #[arg(long, default_value = "./indexes")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index from a collection file and save it
    Index {
        /// Name of the index to create
        name: String,
        /// Collection file (`.I`/`.T`/`.W` record markers)
        collection: PathBuf,
    },
    /// Evaluate a boolean expression (AND, OR, NOT, parentheses)
    Boolean {
        /// Name of a saved index
        name: String,
        /// Expression, e.g. "cat AND (dog OR sat)"
        expression: String,
    },
    /// Rank documents against a free-text query
    Vector {
        /// Name of a saved index
        name: String,
        /// Query text
        query: String,
        /// euclidean, "inner product", cosine, dice or jaccard
        #[arg(long, default_value = "cosine")]
        method: String,
        /// Keep only the k best-ranked documents
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let store = FileStore::new(&cli.data_dir);

    match cli.command {
        Commands::Index { name, collection } => build_index(&store, &name, &collection),
        Commands::Boolean { name, expression } => boolean_query(&store, &name, &expression),
        Commands::Vector {
            name,
            query,
            method,
            top,
        } => vector_query(&store, &name, &query, &method, top),
    }
}

fn build_index(store: &FileStore, name: &str, collection: &Path) -> Result<()> {
    let file = File::open(collection)
        .with_context(|| format!("cannot open collection {}", collection.display()))?;
    let records = corpus::parse_collection(BufReader::new(file))?;
    anyhow::ensure!(!records.is_empty(), "collection contains no documents");

    let catalog = Catalog::open(InvertedIndex::new(name));
    for record in &records {
        catalog.ingest_document(&record.name, &record.lines)?;
    }
    info!(index = name, documents = records.len(), "collection ingested");

    catalog.close(store)?;
    Ok(())
}

fn boolean_query(store: &FileStore, name: &str, expression: &str) -> Result<()> {
    let catalog = Catalog::open(store.load(name)?);
    match catalog.boolean_query(expression)? {
        Some(documents) => print_documents(&documents),
        None => println!("no results (a query term is not indexed)"),
    }
    Ok(())
}

fn vector_query(
    store: &FileStore,
    name: &str,
    query: &str,
    method: &str,
    top: Option<usize>,
) -> Result<()> {
    let catalog = Catalog::open(store.load(name)?);
    let documents = match top {
        Some(k) => catalog.vector_top_k(query, method, k)?,
        None => catalog.vector_query(query, method)?,
    };
    print_documents(&documents);
    Ok(())
}

fn print_documents(documents: &[String]) {
    if documents.is_empty() {
        println!("no results");
        return;
    }
    for (rank, document) in documents.iter().enumerate() {
        println!("{:>4}  {}", rank + 1, document);
    }
}
