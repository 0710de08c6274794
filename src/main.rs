//! fndoc — generate localized function documentation with live examples.
//!
//! Scans a utility library laid out as `{source}/{category}/{name}.ts`,
//! parses the JSDoc-style comment attached to each exported function,
//! pairs it with a sanitized live example from `{examples}/{category}/`,
//! and writes one Docusaurus-style document tree per locale. Every run is
//! a full, idempotent regeneration pass.

mod catalog;
mod locale;
mod model;
mod parser;
mod publish;
mod render;
mod sanitize;
mod scanner;

use anyhow::{Context, Result};
use catalog::ExampleCatalog;
use clap::Parser;
use model::Category;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fndoc",
    about = "Generate localized markdown documentation from annotated utility functions"
)]
struct Cli {
    /// Root directory containing per-category function sources
    #[arg(short, long, default_value = "src")]
    source: PathBuf,

    /// Root directory containing per-category live example components
    #[arg(short, long, default_value = "live")]
    examples: PathBuf,

    /// Site root receiving the generated locale trees
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The catalog is built in full before any rendering starts — it is the
    // one synchronization barrier of the run.
    let catalog = ExampleCatalog::load(&cli.examples)
        .with_context(|| format!("failed to build example catalog from {}", cli.examples.display()))?;
    if catalog.is_empty() {
        eprintln!(
            "warning: no live examples found under {}",
            cli.examples.display()
        );
    }

    // Categories operate on disjoint directories and disjoint output paths,
    // so they are processed in parallel.
    let failures: Vec<String> = Category::ALL
        .par_iter()
        .flat_map(|&category| {
            let docs = scanner::scan_category(&cli.source, category);
            if docs.is_empty() {
                eprintln!(
                    "warning: no documented functions in category {}",
                    category.dir()
                );
                return Vec::new();
            }
            publish::publish_category(&cli.output, category, &docs, &catalog)
        })
        .collect();

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("error: {failure}");
        }
        anyhow::bail!("{} document(s) failed to publish", failures.len());
    }

    Ok(())
}
