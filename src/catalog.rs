//! Example catalog — `category/functionName` → sanitized live source.
//!
//! Built eagerly and in full before any rendering starts; read-only
//! afterwards.

use crate::model::Category;
use crate::sanitize;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Recognized example-file extension.
const EXAMPLE_EXTENSION: &str = "tsx";

#[derive(Debug, Default)]
pub struct ExampleCatalog {
    entries: HashMap<String, String>,
}

impl ExampleCatalog {
    /// Walk every category's example directory under `example_root`.
    /// A missing category directory is skipped; an unreadable one is
    /// logged and skipped; a failed file read is fatal.
    pub fn load(example_root: &Path) -> Result<Self> {
        let mut entries = HashMap::new();

        for category in Category::ALL {
            let dir = example_root.join(category.dir());
            if !dir.is_dir() {
                continue;
            }
            let listing = match fs::read_dir(&dir) {
                Ok(listing) => listing,
                Err(err) => {
                    eprintln!("warning: cannot read {}: {}", dir.display(), err);
                    continue;
                }
            };
            for entry in listing.flatten() {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                if path.extension().and_then(|e| e.to_str()) != Some(EXAMPLE_EXTENSION) {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                entries.insert(
                    format!("{}/{}", category.dir(), stem),
                    sanitize::sanitize(&content),
                );
            }
        }

        Ok(ExampleCatalog { entries })
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&str> {
        self.entries
            .get(&format!("{}/{}", category.dir(), name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        ExampleCatalog {
            entries: entries.into_iter().collect(),
        }
    }
}
