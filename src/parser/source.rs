//! Exported-declaration extraction from a single source unit.
//!
//! A unit is assumed to export exactly one documented declaration; only the
//! first exported declaration is considered. The attached doc comment is the
//! `/** ... */` block whose closing line immediately precedes the declaration
//! (blank lines in between are allowed).

use regex::Regex;
use std::sync::LazyLock;

static RE_EXPORT_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export\s+(?:async\s+)?function\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

static RE_EXPORT_CONST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^export\s+const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=").unwrap()
});

/// The first exported declaration found in a unit.
#[derive(Debug)]
pub struct SourceUnit {
    pub name: String,
    /// First line of the declaration's textual form.
    pub signature: String,
    /// Cleaned doc-comment body (gutter stripped), if a block is attached.
    pub comment: Option<String>,
}

/// Locate the first exported declaration and its attached comment.
/// Returns `None` when the unit exports nothing recognizable — an expected,
/// non-exceptional state.
pub fn first_export(input: &str) -> Option<SourceUnit> {
    let lines: Vec<&str> = input.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let name = RE_EXPORT_FN
            .captures(line)
            .or_else(|| RE_EXPORT_CONST.captures(line))
            .map(|caps| caps[1].to_string());

        if let Some(name) = name {
            return Some(SourceUnit {
                name,
                signature: line.trim_end().to_string(),
                comment: attached_comment(&lines[..i]),
            });
        }
    }

    None
}

/// Walk backwards over the lines preceding a declaration and extract the
/// attached `/** ... */` block, if any.
fn attached_comment(before: &[&str]) -> Option<String> {
    // Skip blank lines between the comment close and the declaration.
    let mut end = before.len();
    while end > 0 && before[end - 1].trim().is_empty() {
        end -= 1;
    }
    if end == 0 || !before[end - 1].trim_end().ends_with("*/") {
        return None;
    }

    // Find the opening line of the block.
    let mut start = end - 1;
    loop {
        if before[start].trim_start().starts_with("/**") {
            break;
        }
        if start == 0 {
            return None;
        }
        start -= 1;
    }

    Some(clean_block(&before[start..end]))
}

/// Strip the `/**`, `*/` and leading `*` gutter from a comment block.
fn clean_block(block: &[&str]) -> String {
    let mut cleaned: Vec<String> = Vec::with_capacity(block.len());

    for (i, raw) in block.iter().enumerate() {
        let mut line = raw.trim_start();
        if i == 0 {
            line = line.strip_prefix("/**").unwrap_or(line);
        }
        if i == block.len() - 1 {
            line = line.trim_end();
            line = line.strip_suffix("*/").unwrap_or(line);
        }
        let line = line.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line);
        let line = line.strip_prefix(' ').unwrap_or(line);
        cleaned.push(line.trim_end().to_string());
    }

    cleaned.join("\n").trim().to_string()
}
