//! Comment parser — one source unit to one optional `FunctionDoc`.

pub mod comment;
pub mod source;

use crate::model::FunctionDoc;

/// Parse a source unit into a `FunctionDoc`.
///
/// `None` means the unit has no named exported declaration — absence of
/// documentation, not an error. A declaration without an attached comment
/// block still yields a doc with only `name` and `signature` populated.
pub fn parse_unit(input: &str) -> Option<FunctionDoc> {
    let unit = source::first_export(input)?;

    let mut doc = FunctionDoc {
        name: unit.name,
        signature: unit.signature,
        ..Default::default()
    };

    if let Some(ref body) = unit.comment {
        comment::apply(body, &mut doc);
    }

    Some(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_without_export_is_no_document() {
        assert!(parse_unit("const internal = 1;\n").is_none());
        assert!(parse_unit("").is_none());
    }

    #[test]
    fn export_without_comment_keeps_defaults() {
        let doc = parse_unit("export function noop(): void {}\n").unwrap();
        assert_eq!(doc.name, "noop");
        assert_eq!(doc.signature, "export function noop(): void {}");
        assert_eq!(doc.description, "");
        assert!(doc.params.is_empty());
        assert!(doc.returns.is_empty());
        assert!(doc.examples.is_empty());
    }

    #[test]
    fn full_unit_parses_everything() {
        let input = "\
import { guard } from '../shared';

/**
 * Adds two numbers.
 *
 * @param {number} a first
 * @param {number} b second
 * @returns {number} sum
 * @example
 * add(1, 2)
 */
export function add(a: number, b: number): number {
  return a + b;
}
";
        let doc = parse_unit(input).unwrap();
        assert_eq!(doc.name, "add");
        assert_eq!(doc.description, "Adds two numbers.");
        assert_eq!(doc.params.len(), 2);
        assert_eq!(doc.params[1].name, "b");
        assert_eq!(doc.returns.ty, "number");
        assert_eq!(doc.returns.description, "sum");
        assert_eq!(doc.examples, vec!["add(1, 2)"]);
        assert_eq!(
            doc.signature,
            "export function add(a: number, b: number): number {"
        );
    }
}
