//! Literal quoting prefixes for client-facing templates.
//!
//! The table is an ordered list of rules evaluated top to bottom; the first
//! rule whose predicate accepts a primitive kind supplies the prefix. Spatial
//! subtypes resolve through their family predicate, so `Edm.GeographyPoint`
//! quotes the same way as `Edm.Geography`.

use crate::model::{PrimitiveKind, SemanticType};

/// One entry of the quoting table.
#[derive(Debug, Clone, Copy)]
pub struct QuotingRule {
    /// Literal written before the opening quote; empty for plain text.
    pub prefix: &'static str,
    matches: fn(PrimitiveKind) -> bool,
}

impl QuotingRule {
    #[must_use]
    pub fn applies_to(&self, kind: PrimitiveKind) -> bool {
        (self.matches)(kind)
    }
}

fn is_string(kind: PrimitiveKind) -> bool {
    kind == PrimitiveKind::String
}

fn is_duration(kind: PrimitiveKind) -> bool {
    kind == PrimitiveKind::Duration
}

fn is_binary(kind: PrimitiveKind) -> bool {
    kind == PrimitiveKind::Binary
}

/// Process-wide, read-only quoting table.
pub static QUOTING_RULES: [QuotingRule; 5] = [
    QuotingRule {
        prefix: "",
        matches: is_string,
    },
    QuotingRule {
        prefix: "duration",
        matches: is_duration,
    },
    QuotingRule {
        prefix: "binary",
        matches: is_binary,
    },
    QuotingRule {
        prefix: "geography",
        matches: PrimitiveKind::is_geography,
    },
    QuotingRule {
        prefix: "geometry",
        matches: PrimitiveKind::is_geometry,
    },
];

/// Quoting prefix registered for `semantic_type`, if any.
///
/// Only primitive types are quoted; enums and collections are decorated by
/// the token expander itself.
#[must_use]
pub fn quoting_prefix(semantic_type: &SemanticType) -> Option<&'static str> {
    let SemanticType::Primitive(kind) = semantic_type else {
        return None;
    };

    QUOTING_RULES
        .iter()
        .find(|rule| rule.applies_to(*kind))
        .map(|rule| rule.prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_of(kind: PrimitiveKind) -> Option<&'static str> {
        quoting_prefix(&SemanticType::Primitive(kind))
    }

    #[test]
    fn test_registered_prefixes() {
        assert_eq!(prefix_of(PrimitiveKind::String), Some(""));
        assert_eq!(prefix_of(PrimitiveKind::Duration), Some("duration"));
        assert_eq!(prefix_of(PrimitiveKind::Binary), Some("binary"));
        assert_eq!(prefix_of(PrimitiveKind::Geography), Some("geography"));
        assert_eq!(prefix_of(PrimitiveKind::Geometry), Some("geometry"));
    }

    #[test]
    fn test_spatial_subtypes_use_family_prefix() {
        assert_eq!(prefix_of(PrimitiveKind::GeographyPoint), Some("geography"));
        assert_eq!(
            prefix_of(PrimitiveKind::GeometryMultiLineString),
            Some("geometry")
        );
    }

    #[test]
    fn test_unregistered_types_have_no_prefix() {
        assert_eq!(prefix_of(PrimitiveKind::Int32), None);
        assert_eq!(prefix_of(PrimitiveKind::Guid), None);
        assert_eq!(prefix_of(PrimitiveKind::DateTimeOffset), None);
        assert_eq!(
            quoting_prefix(&SemanticType::enumeration("Contoso.Color")),
            None
        );
        assert_eq!(
            quoting_prefix(&SemanticType::collection_of(SemanticType::Primitive(
                PrimitiveKind::String
            ))),
            None
        );
    }
}
