//! Data model for extracted documentation — format-agnostic.

use crate::locale::Locale;

/// One parsed `@param` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    /// Braced type from the tag, or `"any"` when the tag omits it.
    pub ty: String,
    pub description: String,
}

/// The single `@returns` contract. Last tag wins during parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnDoc {
    pub ty: String,
    pub description: String,
}

impl ReturnDoc {
    pub fn is_empty(&self) -> bool {
        self.ty.is_empty() && self.description.is_empty()
    }
}

/// A documented exported function. Built once per source unit by the
/// comment parser, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct FunctionDoc {
    /// Identifier of the first exported declaration in the unit.
    pub name: String,
    /// Free-text body of the doc comment, before the first tag.
    pub description: String,
    pub params: Vec<ParamDoc>,
    pub returns: ReturnDoc,
    /// `@example` snippets in source order.
    pub examples: Vec<String>,
    /// First line of the declaration's textual form. Carried in the model;
    /// the renderer's section layout does not emit it.
    #[allow(dead_code)]
    pub signature: String,
}

/// Fixed logical grouping of related functions. Static configuration:
/// ordering and labels are frozen here, never inferred from the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Array,
    Object,
    String,
    Function,
    Number,
    Is,
    Date,
    Promise,
    Collection,
    Math,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Array,
        Category::Object,
        Category::String,
        Category::Function,
        Category::Number,
        Category::Is,
        Category::Date,
        Category::Promise,
        Category::Collection,
        Category::Math,
    ];

    /// Directory name under both the source root and the example root,
    /// and the output directory name per locale.
    pub fn dir(self) -> &'static str {
        match self {
            Category::Array => "array",
            Category::Object => "object",
            Category::String => "string",
            Category::Function => "function",
            Category::Number => "number",
            Category::Is => "is",
            Category::Date => "date",
            Category::Promise => "promise",
            Category::Collection => "collection",
            Category::Math => "math",
        }
    }

    /// Display label in the given locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Category::Array => "Array",
                Category::Object => "Object",
                Category::String => "String",
                Category::Function => "Function",
                Category::Number => "Number",
                Category::Is => "Type Predicates",
                Category::Date => "Date",
                Category::Promise => "Promise",
                Category::Collection => "Collection",
                Category::Math => "Math",
            },
            Locale::ZhCn => match self {
                Category::Array => "数组",
                Category::Object => "对象",
                Category::String => "字符串",
                Category::Function => "函数",
                Category::Number => "数字",
                Category::Is => "类型判断",
                Category::Date => "日期",
                Category::Promise => "Promise",
                Category::Collection => "集合",
                Category::Math => "数学",
            },
        }
    }

    /// Sidebar position: index in the enumeration, one-based.
    pub fn position(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based_and_dense() {
        let positions: Vec<usize> = Category::ALL.iter().map(|c| c.position()).collect();
        assert_eq!(positions, (1..=Category::ALL.len()).collect::<Vec<_>>());
    }

    #[test]
    fn dirs_are_unique() {
        let mut dirs: Vec<&str> = Category::ALL.iter().map(|c| c.dir()).collect();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), Category::ALL.len());
    }

    #[test]
    fn every_category_labeled_in_both_locales() {
        for category in Category::ALL {
            for locale in Locale::ALL {
                assert!(!category.label(locale).is_empty());
            }
        }
    }

    #[test]
    fn empty_return_doc() {
        assert!(ReturnDoc::default().is_empty());
        let r = ReturnDoc {
            ty: "number".into(),
            description: String::new(),
        };
        assert!(!r.is_empty());
    }
}
