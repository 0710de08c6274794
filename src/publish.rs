//! Publisher — the only component with filesystem side effects.
//!
//! Writes are best-effort per item: a failed write is recorded and the
//! batch continues, so one bad path cannot hide the rest of the run.
//! Callers report the collected failures in aggregate.

use crate::catalog::ExampleCatalog;
use crate::locale::Locale;
use crate::model::{Category, FunctionDoc};
use crate::render;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sidebar descriptor written next to each category's documents.
#[derive(Serialize)]
struct CategoryDescriptor {
    label: String,
    position: usize,
}

/// Publish one category: for each locale, the index document, the ordering
/// descriptor, and one document per function. Returns the failures
/// encountered; an empty vector means every file was written.
pub fn publish_category(
    output_root: &Path,
    category: Category,
    docs: &[FunctionDoc],
    catalog: &ExampleCatalog,
) -> Vec<String> {
    let mut failures = Vec::new();

    for locale in Locale::ALL {
        let dir = output_root.join(locale.root()).join(category.dir());
        if let Err(err) = fs::create_dir_all(&dir) {
            failures.push(format!("failed to create {}: {}", dir.display(), err));
            continue;
        }

        write_file(
            &mut failures,
            dir.join("index.md"),
            render::render_index(category, locale),
        );

        write_file(
            &mut failures,
            dir.join("_category_.json"),
            descriptor_json(category, locale),
        );

        for doc in docs {
            // Names are assumed unique per category; a collision silently
            // overwrites the earlier file (left undefined upstream).
            write_file(
                &mut failures,
                dir.join(format!("{}.md", doc.name)),
                render::render_function(doc, category, locale, catalog),
            );
        }
    }

    failures
}

fn descriptor_json(category: Category, locale: Locale) -> String {
    let descriptor = CategoryDescriptor {
        label: category.label(locale).to_string(),
        position: category.position(),
    };
    // Serializing two plain fields cannot fail.
    let mut json = serde_json::to_string_pretty(&descriptor).unwrap_or_default();
    json.push('\n');
    json
}

fn write_file(failures: &mut Vec<String>, path: PathBuf, content: String) {
    if let Err(err) = fs::write(&path, content) {
        failures.push(format!("failed to write {}: {}", path.display(), err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReturnDoc;

    fn sample_docs() -> Vec<FunctionDoc> {
        vec![FunctionDoc {
            name: "chunk".into(),
            description: "Splits an array into chunks.".into(),
            returns: ReturnDoc {
                ty: "T[][]".into(),
                description: "the chunks".into(),
            },
            signature: "export function chunk<T>(arr: T[], size = 1): T[][] {".into(),
            ..Default::default()
        }]
    }

    #[test]
    fn writes_all_artifacts_for_both_locales() {
        let out = tempfile::tempdir().unwrap();
        let failures = publish_category(
            out.path(),
            Category::Array,
            &sample_docs(),
            &ExampleCatalog::default(),
        );
        assert!(failures.is_empty(), "{failures:?}");

        for locale in Locale::ALL {
            let dir = out.path().join(locale.root()).join("array");
            assert!(dir.join("index.md").is_file());
            assert!(dir.join("_category_.json").is_file());
            assert!(dir.join("chunk.md").is_file());
        }
    }

    #[test]
    fn descriptor_is_valid_json_with_label_and_position() {
        let out = tempfile::tempdir().unwrap();
        publish_category(
            out.path(),
            Category::Array,
            &sample_docs(),
            &ExampleCatalog::default(),
        );

        let path = out
            .path()
            .join(Locale::ZhCn.root())
            .join("array")
            .join("_category_.json");
        let raw = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["label"], "数组");
        assert_eq!(value["position"], 1);
    }

    #[test]
    fn unwritable_root_reports_failures_without_panicking() {
        let failures = publish_category(
            Path::new("/proc/fndoc-cannot-write-here"),
            Category::Math,
            &sample_docs(),
            &ExampleCatalog::default(),
        );
        assert_eq!(failures.len(), Locale::ALL.len());
    }
}
