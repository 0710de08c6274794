//! Output locales and their fixed section-label translations.
//!
//! The renderer never falls back between locales: every label below must
//! exist for every supported locale, and `Locale` being a closed enum makes
//! an unsupported locale unrepresentable.

/// A supported output language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    ZhCn,
}

/// Section labels and placeholder strings consulted by the renderer.
#[derive(Debug)]
pub struct Labels {
    pub description: &'static str,
    pub parameters: &'static str,
    pub parameter: &'static str,
    pub ty: &'static str,
    pub returns: &'static str,
    pub examples: &'static str,
    pub interactive: &'static str,
    /// Body text of the synthesized placeholder component.
    pub coming_soon: &'static str,
    /// Placeholder for an empty table cell.
    pub empty: &'static str,
}

static EN: Labels = Labels {
    description: "Description",
    parameters: "Parameters",
    parameter: "Parameter",
    ty: "Type",
    returns: "Returns",
    examples: "Examples",
    interactive: "Live Example",
    coming_soon: "Interactive example coming soon.",
    empty: "-",
};

static ZH_CN: Labels = Labels {
    description: "描述",
    parameters: "参数",
    parameter: "参数",
    ty: "类型",
    returns: "返回值",
    examples: "示例",
    interactive: "在线示例",
    coming_soon: "交互示例即将推出。",
    empty: "-",
};

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhCn];

    /// IETF-style tag, used in diagnostics.
    #[allow(dead_code)]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Site-relative root receiving this locale's generated tree.
    pub fn root(self) -> &'static str {
        match self {
            Locale::En => "docs",
            Locale::ZhCn => "i18n/zh-CN/docusaurus-plugin-content-docs/current",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::ZhCn => &ZH_CN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_tables_complete_for_all_locales() {
        for locale in Locale::ALL {
            let labels = locale.labels();
            for label in [
                labels.description,
                labels.parameters,
                labels.parameter,
                labels.ty,
                labels.returns,
                labels.examples,
                labels.interactive,
                labels.coming_soon,
                labels.empty,
            ] {
                assert!(!label.is_empty(), "empty label for {}", locale.tag());
            }
        }
    }

    #[test]
    fn locale_roots_are_distinct() {
        assert_ne!(Locale::En.root(), Locale::ZhCn.root());
    }
}
