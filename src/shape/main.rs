//! Command line front end for result shaping.
//!
//! Reads address rows or search hits from JSON files, or fetches hits from
//! Elasticsearch, and prints the shaped output as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use geoshape::config::Config;
use geoshape::elasticsearch::{parse_hits, EsClient};
use geoshape::models::{FeatureCollection, SearchHit};
use geoshape::{classify, AddressContext, AddressRecord, AddressRoles, FeatureAssembler};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "shape")]
#[command(about = "Classify address rows and assemble geocoding results")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the roles of each address row and the folded context
    Classify {
        /// JSON array of address rows
        file: PathBuf,
    },
    /// Assemble raw hits into a FeatureCollection
    Assemble {
        /// JSON array of hit sources, or a raw search response
        file: PathBuf,
        /// Response language
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Query Elasticsearch and print the assembled features
    Search {
        text: String,
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        es_url: Option<String>,
        #[arg(long)]
        index: Option<String>,
    },
}

#[derive(Serialize)]
struct ClassifiedRow {
    place_id: i64,
    source_id: String,
    tag: String,
    roles: AddressRoles,
}

#[derive(Serialize)]
struct ClassifyOutput {
    rows: Vec<ClassifiedRow>,
    context: AddressContext,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match args.command {
        Command::Classify { file } => run_classify(&file),
        Command::Assemble { file, lang } => {
            let lang = lang.unwrap_or_else(|| config.output.default_lang.clone());
            let hits = read_hits(&file)?;
            print_features(&config, &hits, &lang)
        }
        Command::Search {
            text,
            lang,
            size,
            es_url,
            index,
        } => {
            let lang = lang.unwrap_or_else(|| config.output.default_lang.clone());
            let es_url = es_url.unwrap_or_else(|| config.elasticsearch.url.clone());
            let index = index.unwrap_or_else(|| config.elasticsearch.index.clone());
            let size = size.unwrap_or(config.elasticsearch.size);

            info!("Connecting to Elasticsearch at {}", es_url);
            let client =
                EsClient::new(&es_url, &index).context("Failed to create Elasticsearch client")?;

            if !client.health_check().await? {
                anyhow::bail!("Elasticsearch cluster is not healthy");
            }

            let hits = client
                .search_hits(&text, &lang, size)
                .await
                .context("Search failed")?;
            info!("Got {} hits from '{}'", hits.len(), index);

            print_features(&config, &hits, &lang)
        }
    }
}

fn run_classify(file: &Path) -> Result<()> {
    let content = fs::read_to_string(file).context("Failed to read address rows")?;
    let rows: Vec<AddressRecord> =
        serde_json::from_str(&content).context("Failed to parse address rows")?;

    let output = ClassifyOutput {
        rows: rows
            .iter()
            .map(|row| ClassifiedRow {
                place_id: row.place_id,
                source_id: format!("{}/{}", row.osm_type, row.osm_id),
                tag: row.tag(),
                roles: classify(row),
            })
            .collect(),
        context: AddressContext::from_rows(&rows),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Accepts either a bare array of `_source` documents or a full search response
fn read_hits(file: &Path) -> Result<Vec<SearchHit>> {
    let content = fs::read_to_string(file).context("Failed to read hits")?;
    let value: serde_json::Value = serde_json::from_str(&content).context("Failed to parse hits")?;

    if value.is_array() {
        return serde_json::from_value(value).context("Failed to parse hits");
    }
    Ok(parse_hits(&value))
}

fn print_features(config: &Config, hits: &[SearchHit], lang: &str) -> Result<()> {
    let assembler = FeatureAssembler::new(lang);
    let features = if config.output.parallel {
        assembler.assemble_par(hits)
    } else {
        assembler.assemble(hits)
    };

    let collection = FeatureCollection::from(features);
    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}
