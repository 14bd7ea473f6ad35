//! Route token expansion and scanning.

use super::quoting::quoting_prefix;
use crate::model::{GenerationKind, RouteOptions, SemanticType};
use std::ops::Range;

/// Settings shared by every token expanded for one context.
#[derive(Debug, Clone, Copy)]
pub struct TokenStyle {
    pub generation_kind: GenerationKind,
    pub options: RouteOptions,
}

/// Render `{name}` with the decoration its type calls for.
///
/// Server templates and keys rendered as extra path segments stay bare.
/// Client templates bracket collections, quote enums (qualified by their type
/// name unless unqualified literals are allowed) and quote the primitive types
/// registered in the quoting table.
#[must_use]
pub fn expand_token(
    semantic_type: &SemanticType,
    name: &str,
    key_as_segment: bool,
    style: TokenStyle,
) -> String {
    debug_assert!(!name.is_empty(), "route token name must not be empty");

    let token = format!("{{{name}}}");

    if style.generation_kind == GenerationKind::Server || key_as_segment {
        return token;
    }

    match semantic_type {
        SemanticType::Collection(_) => format!("[{token}]"),
        SemanticType::Enum { full_name } => {
            if style.options.allow_unqualified_enum_literal {
                format!("'{token}'")
            } else {
                format!("{full_name}'{token}'")
            }
        }
        other => match quoting_prefix(other) {
            Some(prefix) => format!("{prefix}'{token}'"),
            None => token,
        },
    }
}

/// A `{name}` or `{name:constraint}` token found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateToken<'a> {
    /// Name before any inline constraint.
    pub name: &'a str,
    /// Byte range covering the braces.
    pub span: Range<usize>,
}

/// Left-to-right scanner over the brace tokens of a template.
///
/// An unterminated `{` ends the scan.
pub struct TokenScanner<'a> {
    template: &'a str,
    offset: usize,
}

impl<'a> TokenScanner<'a> {
    #[must_use]
    pub fn new(template: &'a str) -> Self {
        TokenScanner {
            template,
            offset: 0,
        }
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = TemplateToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.template.get(self.offset..)?;
        let open = self.offset + rest.find('{')?;
        let close = open + self.template[open..].find('}')?;
        self.offset = close + 1;

        let inner = &self.template[open + 1..close];
        let name = inner.split(':').next().unwrap_or(inner);

        Some(TemplateToken {
            name,
            span: open..close + 1,
        })
    }
}

/// First token in `template` named exactly `name`.
#[must_use]
pub fn find_token<'a>(template: &'a str, name: &str) -> Option<TemplateToken<'a>> {
    TokenScanner::new(template).find(|token| token.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrimitiveKind;

    const CLIENT: TokenStyle = TokenStyle {
        generation_kind: GenerationKind::Client,
        options: RouteOptions {
            use_qualified_operation_names: false,
            allow_unqualified_enum_literal: false,
        },
    };

    const SERVER: TokenStyle = TokenStyle {
        generation_kind: GenerationKind::Server,
        options: CLIENT.options,
    };

    fn string() -> SemanticType {
        SemanticType::Primitive(PrimitiveKind::String)
    }

    #[test]
    fn test_server_tokens_are_bare() {
        assert_eq!(expand_token(&string(), "name", false, SERVER), "{name}");
        let ids = SemanticType::collection_of(SemanticType::Primitive(PrimitiveKind::Int32));
        assert_eq!(expand_token(&ids, "ids", false, SERVER), "{ids}");
    }

    #[test]
    fn test_client_decorations() {
        assert_eq!(expand_token(&string(), "name", false, CLIENT), "'{name}'");
        let ids = SemanticType::collection_of(SemanticType::Primitive(PrimitiveKind::Int32));
        assert_eq!(expand_token(&ids, "ids", false, CLIENT), "[{ids}]");
        let span = SemanticType::Primitive(PrimitiveKind::Duration);
        assert_eq!(
            expand_token(&span, "span", false, CLIENT),
            "duration'{span}'"
        );
        let int = SemanticType::Primitive(PrimitiveKind::Int32);
        assert_eq!(expand_token(&int, "id", false, CLIENT), "{id}");
    }

    #[test]
    fn test_enum_qualification() {
        let color = SemanticType::enumeration("Contoso.Color");
        assert_eq!(
            expand_token(&color, "color", false, CLIENT),
            "Contoso.Color'{color}'"
        );

        let mut unqualified = CLIENT;
        unqualified.options.allow_unqualified_enum_literal = true;
        assert_eq!(
            expand_token(&color, "color", false, unqualified),
            "'{color}'"
        );
    }

    #[test]
    fn test_key_as_segment_suppresses_decoration() {
        assert_eq!(expand_token(&string(), "code", true, CLIENT), "{code}");
    }

    #[test]
    fn test_scanner_skips_other_tokens_and_constraints() {
        let template = "Orders({key:int})/Fn(a={a},ids={ids})";
        let names: Vec<_> = TokenScanner::new(template).map(|t| t.name).collect();
        assert_eq!(names, vec!["key", "a", "ids"]);

        let ids = find_token(template, "ids").unwrap();
        assert_eq!(&template[ids.span], "{ids}");
    }

    #[test]
    fn test_scanner_requires_exact_name() {
        assert!(find_token("Fn(idsAll={idsAll})", "ids").is_none());
        assert!(find_token("Fn(ids={ids", "ids").is_none());
    }
}
