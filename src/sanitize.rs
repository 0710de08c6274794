//! Live-example sanitizer.
//!
//! Turns a typed example component into plain source the live-preview
//! runtime can execute: drops imports and leading commentary, removes the
//! `export default` qualifier, and erases type annotations with three
//! best-effort regex passes. This is a heuristic, not a compiler pass:
//! nested generics (`Map<string, number>`), multi-line signatures and
//! unusual punctuation may survive incorrectly.

use regex::Regex;
use std::sync::LazyLock;

/// Marker for the renderable component declaration.
const EXPORT_DEFAULT: &str = "export default";

static RE_EXPORT_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+default\s+").unwrap());

// The annotation classes stay within one line on purpose: a multi-line
// annotation fails the match and survives, instead of the pass eating
// unrelated code.

/// Pass (a): annotation before a parameter delimiter — `,`, `)`, `]`, `=>`.
static RE_PARAM_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":[ \t]*[A-Za-z_$][\w$.\[\]<>|& \t]*(,|\)|\]|=>)").unwrap()
});

/// Pass (b): annotation before an assignment or statement terminator.
static RE_BINDING_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":[ \t]*[A-Za-z_$][\w$.\[\]<>|& \t]*?([ \t]*=[ \t]|;)").unwrap()
});

/// Pass (c): return-type annotation after the parameter list.
static RE_RETURN_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\)[ \t]*:[ \t]*[A-Za-z_$][\w$.\[\]<>|& \t]*\{").unwrap()
});

/// Extract and type-erase the default-exported component of an example file.
///
/// Returns the input unchanged when no `export default` marker exists —
/// a conservative fallback, never an error.
pub fn sanitize(input: &str) -> String {
    let Some(marker_line) = input.lines().position(|l| l.contains(EXPORT_DEFAULT)) else {
        return input.to_string();
    };

    let retained = input
        .lines()
        .skip(marker_line)
        .collect::<Vec<_>>()
        .join("\n");

    let plain = RE_EXPORT_DEFAULT.replace(&retained, "");
    let plain = RE_PARAM_ANNOTATION.replace_all(&plain, "$1");
    let plain = RE_BINDING_ANNOTATION.replace_all(&plain, "$1");
    let plain = RE_RETURN_ANNOTATION.replace_all(&plain, ") {");

    plain.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_is_a_noop() {
        let input = "function helper() {\n  return 1;\n}\n";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn drops_imports_and_leading_comments() {
        let input = "\
import React from 'react';
import { chunk } from 'utils';

// live example metadata
export default function Demo() {
  return null;
}";
        let out = sanitize(input);
        assert!(out.starts_with("function Demo()"));
        assert!(!out.contains("import"));
    }

    #[test]
    fn never_reemits_export_default() {
        let out = sanitize("export default function Demo() {\n  return null;\n}\n");
        assert!(!out.contains("export"));
        assert!(!out.contains("default"));
    }

    #[test]
    fn strips_parameter_annotations() {
        let out = sanitize("export default function Demo(count: number, label: string) {\n}");
        assert!(out.contains("function Demo(count, label)"), "got: {out}");
    }

    #[test]
    fn strips_array_type_annotation() {
        let out = sanitize("export default function Demo(items: string[], size: number) {\n}");
        assert!(out.contains("function Demo(items, size)"), "got: {out}");
    }

    #[test]
    fn strips_binding_annotations() {
        let out = sanitize(
            "export default function Demo() {\n  const total: number = 3;\n  let label: string;\n}",
        );
        assert!(out.contains("const total = 3;"), "got: {out}");
        assert!(out.contains("let label;"), "got: {out}");
    }

    #[test]
    fn strips_return_type_annotation() {
        let out = sanitize("export default function Demo(): JSX.Element {\n  return null;\n}");
        assert!(out.contains("function Demo() {"), "got: {out}");
    }

    #[test]
    fn strips_arrow_parameter_annotation() {
        let out =
            sanitize("export default function Demo() {\n  const f = (x: number) => x * 2;\n}");
        assert!(out.contains("(x) => x * 2"), "got: {out}");
    }

    #[test]
    fn default_valued_parameter() {
        let out = sanitize("export default function Demo(size: number = 2) {\n}");
        assert!(out.contains("function Demo(size = 2)"), "got: {out}");
    }

    #[test]
    fn generic_single_argument_stripped() {
        let out = sanitize("export default function Demo(items: Array<number>) {\n}");
        assert!(out.contains("function Demo(items)"), "got: {out}");
    }
}
