//! Per-category source scanning.

use crate::model::{Category, FunctionDoc};
use crate::parser;
use std::fs;
use std::path::Path;

/// Source-file extension recognized by the scanner.
const SOURCE_EXTENSION: &str = "ts";

/// Aggregator file re-exporting the category's functions; never documented.
const AGGREGATOR: &str = "index.ts";

/// Collect the documented functions of one category, sorted by name
/// (ascending, ordinal comparison — deliberately locale-insensitive).
///
/// A missing or unreadable directory yields an empty result and a stderr
/// diagnostic; zero documented functions is a valid, skippable outcome.
pub fn scan_category(source_root: &Path, category: Category) -> Vec<FunctionDoc> {
    let dir = source_root.join(category.dir());
    let listing = match fs::read_dir(&dir) {
        Ok(listing) => listing,
        Err(err) => {
            eprintln!("warning: cannot read {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut docs: Vec<FunctionDoc> = Vec::new();
    for entry in listing.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(AGGREGATOR) {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => {
                if let Some(doc) = parser::parse_unit(&content) {
                    docs.push(doc);
                }
            }
            Err(err) => {
                eprintln!("warning: skipping {}: {}", path.display(), err);
            }
        }
    }

    docs.sort_by(|a, b| a.name.cmp(&b.name));
    docs
}
