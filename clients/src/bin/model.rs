//! `vocabgen-model`: builds the vocabulary model for one RDF vocabulary and
//! prints it as JSON.
//!
//! All input files are merged into a single vocabulary. An optional
//! `--terms-from` file restricts the generated terms to its subjects.
//!
//! **Usage:**
//! ```
//! vocabgen-model <vocab.ttl>... [--terms-from <selection.ttl>] [--config <options.toml>]
//!                [--namespace-override <iri>] [--name-and-prefix-override <name>]
//!                [--description-fallback <text>] [--ignore-non-vocab-terms]
//!                [--store-local-copy <dir>] [--out <model.json>]
//! ```
//!
//! Logging is controlled by `RUST_LOG` (default `info`) and goes to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocabgen_model::{GeneratorOptions, ModelBuilder};
use vocabgen_rdf::parser::load_turtle_file;
use vocabgen_rdf::{Graph, TripleSource};

/// Build a vocabulary model from Turtle files.
#[derive(Parser)]
#[command(
    name = "vocabgen-model",
    about = "Build a language-agnostic vocabulary model from RDF Turtle files"
)]
struct Args {
    /// Turtle files making up the vocabulary.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Turtle file whose subjects select the terms to keep.
    #[arg(long)]
    terms_from: Option<PathBuf>,

    /// Generator options file (TOML). Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Namespace IRI to use instead of the detected one.
    #[arg(long)]
    namespace_override: Option<String>,

    /// Name and prefix to use instead of the declared ones.
    #[arg(long)]
    name_and_prefix_override: Option<String>,

    /// Vocabulary description to use when none is declared.
    #[arg(long)]
    description_fallback: Option<String>,

    /// Drop terms outside the vocabulary namespace.
    #[arg(long)]
    ignore_non_vocab_terms: bool,

    /// Directory receiving a content-addressed local copy of the vocabulary.
    #[arg(long)]
    store_local_copy: Option<PathBuf>,

    /// Write the model here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = options(&args)?;

    let vocab = load(&args.inputs)?;
    let selection = match &args.terms_from {
        Some(path) => Some(load(std::slice::from_ref(path))?),
        None => None,
    };

    let builder = ModelBuilder::new(&vocab, &options);
    let builder = match &selection {
        Some(selection) => builder.with_term_selection(selection),
        None => builder,
    };
    let vocabulary = builder.build().with_context(|| {
        format!(
            "Failed to build vocabulary model from {}",
            display_paths(&args.inputs)
        )
    })?;

    let json = serde_json::to_string_pretty(&vocabulary)
        .context("Failed to serialize vocabulary model to JSON")?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote vocabulary model");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Merges the options file (if any) with command-line overrides.
fn options(args: &Args) -> Result<GeneratorOptions> {
    let mut options = match &args.config {
        Some(path) => GeneratorOptions::from_toml_file(path)?,
        None => GeneratorOptions::default(),
    };
    if options.input_resources.is_empty() {
        options.input_resources = args
            .inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect();
    }
    if args.ignore_non_vocab_terms {
        options.ignore_non_vocab_terms = true;
    }
    if let Some(ns) = &args.namespace_override {
        options.namespace_override = Some(ns.clone());
    }
    if let Some(name) = &args.name_and_prefix_override {
        options.name_and_prefix_override = Some(name.clone());
    }
    if let Some(description) = &args.description_fallback {
        options.description_fallback = Some(description.clone());
    }
    if let Some(dir) = &args.store_local_copy {
        options.store_local_copy_of_vocab_directory = Some(dir.clone());
    }
    Ok(options)
}

/// Loads every file into one graph.
fn load(paths: &[PathBuf]) -> Result<Graph> {
    let mut graph = Graph::new();
    for path in paths {
        load_turtle_file(&mut graph, path)
            .with_context(|| format!("Failed to load vocabulary: {}", path.display()))?;
    }
    info!(
        files = paths.len(),
        statements = graph.len(),
        "loaded triples"
    );
    Ok(graph)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
