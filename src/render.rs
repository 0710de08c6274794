//! Markdown document renderer.
//!
//! Pure: the same (doc, category, locale, catalog) tuple always renders to
//! byte-identical output. Section labels and placeholders come from the
//! locale's fixed translation table; sections with nothing to say are
//! omitted entirely.

use crate::catalog::ExampleCatalog;
use crate::locale::Locale;
use crate::model::{Category, FunctionDoc};

/// Render one function's complete document body.
pub fn render_function(
    doc: &FunctionDoc,
    category: Category,
    locale: Locale,
    catalog: &ExampleCatalog,
) -> String {
    let labels = locale.labels();
    let mut out = String::new();

    // Front matter
    out.push_str("---\n");
    out.push_str(&format!("id: {}\n", doc.name));
    out.push_str(&format!("title: {}\n", doc.name));
    let description = front_matter_text(&doc.description);
    if !description.is_empty() {
        out.push_str(&format!("description: \"{}\"\n", description));
    }
    out.push_str("---\n\n");

    // Heading
    out.push_str(&format!("# {}\n", doc.name));

    // Description paragraph
    if !doc.description.is_empty() {
        out.push_str(&format!("\n{}\n", doc.description));
    }

    // Parameters table
    if !doc.params.is_empty() {
        out.push_str(&format!("\n## {}\n\n", labels.parameters));
        out.push_str(&format!(
            "| {} | {} | {} |\n| --- | --- | --- |\n",
            labels.parameter, labels.ty, labels.description
        ));
        for param in &doc.params {
            out.push_str(&format!(
                "| {} | `{}` | {} |\n",
                param.name,
                param.ty,
                cell(&param.description, labels.empty)
            ));
        }
    }

    // Returns table
    if !doc.returns.is_empty() {
        out.push_str(&format!("\n## {}\n\n", labels.returns));
        out.push_str(&format!(
            "| {} | {} |\n| --- | --- |\n",
            labels.ty, labels.description
        ));
        let ty = if doc.returns.ty.is_empty() {
            labels.empty.to_string()
        } else {
            format!("`{}`", doc.returns.ty)
        };
        out.push_str(&format!(
            "| {} | {} |\n",
            ty,
            cell(&doc.returns.description, labels.empty)
        ));
    }

    // Recorded examples
    if !doc.examples.is_empty() {
        out.push_str(&format!("\n## {}\n", labels.examples));
        for example in &doc.examples {
            out.push_str(&format!("\n```ts\n{}\n```\n", example));
        }
    }

    // Interactive example: catalog hit, or a localized placeholder
    out.push_str(&format!("\n## {}\n\n", labels.interactive));
    match catalog.get(category, &doc.name) {
        Some(code) => {
            out.push_str(&format!("```tsx live\n{}\n```\n", code.trim_end()));
        }
        None => {
            out.push_str(&format!(
                "```tsx live\nfunction Demo() {{\n  return <div>{}</div>;\n}}\n```\n",
                labels.coming_soon
            ));
        }
    }

    out
}

/// Render a category's index document.
pub fn render_index(category: Category, locale: Locale) -> String {
    let label = category.label(locale);
    let blurb = match locale {
        Locale::En => format!("{} utilities.", label),
        Locale::ZhCn => format!("{}相关工具函数。", label),
    };

    format!(
        "---\nid: index\ntitle: {label}\ndescription: \"{}\"\n---\n\n# {label}\n\n{blurb}\n",
        front_matter_text(&blurb)
    )
}

/// Collapse newlines to spaces, trim, and escape double quotes for a YAML
/// front-matter value.
fn front_matter_text(text: &str) -> String {
    text.replace('\n', " ").trim().replace('"', "\\\"")
}

fn cell<'a>(text: &'a str, empty: &'a str) -> &'a str {
    if text.is_empty() {
        empty
    } else {
        text
    }
}
