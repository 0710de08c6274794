//! Doc-comment tag parsing.
//!
//! Tags follow the JSDoc shape. `@param` and `@returns` are matched by
//! single-line patterns; a tag that does not fit (multi-line description,
//! destructured parameter name) is silently dropped. This is a documented
//! limitation kept for output stability, not a bug to fix.

use crate::model::{FunctionDoc, ParamDoc, ReturnDoc};
use regex::Regex;
use std::sync::LazyLock;

/// `@param {Type} name rest-of-line` — type and description optional.
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\{([^}]*)\}\s+)?([A-Za-z_$][A-Za-z0-9_$]*)(?:\s+(.*))?$").unwrap()
});

/// `@returns {Type} rest-of-line` — both parts optional.
static RE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\{([^}]*)\}\s*)?(.*)$").unwrap());

/// A tag line starts with `@` followed by a bare word.
static RE_TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z][A-Za-z0-9]*)\b\s*").unwrap());

struct Tag {
    name: String,
    text: String,
}

/// Apply a cleaned comment body to a partially-built `FunctionDoc`.
pub fn apply(body: &str, doc: &mut FunctionDoc) {
    let (description, tags) = tokenize(body);
    doc.description = description;

    for tag in tags {
        match tag.name.as_str() {
            "param" => {
                if let Some(param) = parse_param(&tag.text) {
                    doc.params.push(param);
                }
            }
            // Last tag wins; the parser does not aggregate.
            "returns" | "return" => {
                if let Some(returns) = parse_returns(&tag.text) {
                    doc.returns = returns;
                }
            }
            "example" => {
                let text = tag.text.trim();
                if !text.is_empty() {
                    doc.examples.push(text.to_string());
                }
            }
            _ => {}
        }
    }
}

/// Split the comment body into the free-text description and its tags.
/// A tag's text runs to the next tag line or the end of the comment.
fn tokenize(body: &str) -> (String, Vec<Tag>) {
    let mut description: Vec<&str> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim_start();
        if let Some(caps) = RE_TAG_START.captures(trimmed) {
            let rest = &trimmed[caps[0].len()..];
            tags.push(Tag {
                name: caps[1].to_string(),
                text: rest.to_string(),
            });
        } else if let Some(tag) = tags.last_mut() {
            tag.text.push('\n');
            tag.text.push_str(line);
        } else {
            description.push(line);
        }
    }

    (description.join("\n").trim().to_string(), tags)
}

/// Parse a single-line `@param` tag. Multi-line or oddly shaped tags fail
/// the match and are dropped.
fn parse_param(text: &str) -> Option<ParamDoc> {
    let caps = RE_PARAM.captures(text)?;
    Some(ParamDoc {
        name: caps[2].to_string(),
        ty: caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "any".to_string()),
        description: caps
            .get(3)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

fn parse_returns(text: &str) -> Option<ReturnDoc> {
    let caps = RE_RETURNS.captures(text)?;
    Some(ReturnDoc {
        ty: caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        description: caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}
